use serde::Serialize;

/// Where a gap sits inside the service window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapKind {
    Start,
    Middle,
    End,
}

impl GapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapKind::Start => "start",
            GapKind::Middle => "middle",
            GapKind::End => "end",
        }
    }
}

/// An uncovered stretch of a service window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
    pub kind: GapKind,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    /// Text shown to the user.
    pub description: String,
    /// Localized sentence without any service prefix.
    #[serde(skip)]
    pub phrase: String,
    /// Service the gap belongs to, when known. Only the aggregate view also
    /// prefixes `description` with it.
    pub service_name: Option<String>,
}

impl CoverageGap {
    pub fn new(kind: GapKind, start_time: String, end_time: String, phrase: String) -> Self {
        Self {
            kind,
            start_time,
            end_time,
            description: phrase.clone(),
            phrase,
            service_name: None,
        }
    }

    /// Tag the gap with its service, leaving the description as is.
    pub fn with_service_name(mut self, service_name: &str) -> Self {
        self.service_name = Some(service_name.to_string());
        self
    }

    /// Attach the service name and prefix the description with it.
    pub fn for_service(mut self, service_name: &str) -> Self {
        self.description = format!("{}: {}", service_name, self.phrase);
        self.service_name = Some(service_name.to_string());
        self
    }
}

/// What a calendar cell needs to know about a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayCoverageInfo {
    pub should_highlight: bool,
    pub gaps: Vec<CoverageGap>,
    pub service_name: Option<String>,
}
