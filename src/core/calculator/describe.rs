//! Localized sentences for coverage gaps.

use crate::models::language::Language;
use crate::utils::time::minutes_to_12h;

/// The six sentence shapes a gap can be described with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapTemplate {
    StartGap,
    MiddleGap,
    EndGap,
    FullServiceGap,
    /// Uncovered until midnight, in the night half of an overnight window.
    OvernightStartGap,
    /// Uncovered from midnight, in the morning half of an overnight window.
    OvernightEndGap,
}

fn subject(service_name: &str, lang: Language) -> String {
    let name = service_name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    match lang {
        Language::Es => "el servicio".to_string(),
        Language::En => "the service".to_string(),
    }
}

/// Render a gap sentence. `start`/`end` are minutes since midnight.
pub fn describe_gap(
    template: GapTemplate,
    service_name: &str,
    start: u32,
    end: u32,
    lang: Language,
) -> String {
    let s = subject(service_name, lang);
    let a = minutes_to_12h(start);
    let b = minutes_to_12h(end);

    match (lang, template) {
        (Language::Es, GapTemplate::StartGap) => {
            format!("Falta cobertura al inicio de {s} de {a} a {b}")
        }
        (Language::Es, GapTemplate::MiddleGap) => format!("Falta cobertura en {s} de {a} a {b}"),
        (Language::Es, GapTemplate::EndGap) => {
            format!("Falta cobertura al final de {s} de {a} a {b}")
        }
        (Language::Es, GapTemplate::FullServiceGap) => {
            format!("Sin guardias asignados en {s} de {a} a {b}")
        }
        (Language::Es, GapTemplate::OvernightStartGap) => {
            format!("Falta cobertura nocturna en {s} de {a} hasta la medianoche")
        }
        (Language::Es, GapTemplate::OvernightEndGap) => {
            format!("Falta cobertura en {s} desde la medianoche hasta {b}")
        }

        (Language::En, GapTemplate::StartGap) => {
            format!("Missing coverage at the start of {s} from {a} to {b}")
        }
        (Language::En, GapTemplate::MiddleGap) => {
            format!("Missing coverage in {s} from {a} to {b}")
        }
        (Language::En, GapTemplate::EndGap) => {
            format!("Missing coverage at the end of {s} from {a} to {b}")
        }
        (Language::En, GapTemplate::FullServiceGap) => {
            format!("No guards assigned to {s} from {a} to {b}")
        }
        (Language::En, GapTemplate::OvernightStartGap) => {
            format!("Missing overnight coverage in {s} from {a} until midnight")
        }
        (Language::En, GapTemplate::OvernightEndGap) => {
            format!("Missing coverage in {s} from midnight until {b}")
        }
    }
}
