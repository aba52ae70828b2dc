use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Language used for gap descriptions and footer summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    /// Convert config string → enum
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "es" | "spanish" | "español" => Some(Language::Es),
            "en" | "english" => Some(Language::En),
            _ => None,
        }
    }

    /// Word used to chain several gap phrases of the same service.
    pub fn conjunction(&self) -> &'static str {
        match self {
            Language::Es => "y",
            Language::En => "and",
        }
    }
}
