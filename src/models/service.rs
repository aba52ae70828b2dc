use crate::utils::time::parse_minutes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A property service and the window during which it requires guard coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceWindow {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    /// "HH:MM" (the backend may also send "HH:MM:SS")
    #[serde(default, alias = "startTime")]
    pub start_time: Option<String>,

    #[serde(default, alias = "endTime")]
    pub end_time: Option<String>,

    /// ISO dates on which the service is active. None = every day.
    #[serde(default)]
    pub schedule: Option<Vec<String>>,
}

impl ServiceWindow {
    pub fn new(id: i64, name: &str, start_time: Option<&str>, end_time: Option<&str>) -> Self {
        Self {
            id,
            name: name.to_string(),
            start_time: start_time.map(str::to_string),
            end_time: end_time.map(str::to_string),
            schedule: None,
        }
    }

    pub fn with_schedule(mut self, dates: &[&str]) -> Self {
        self.schedule = Some(dates.iter().map(|d| d.to_string()).collect());
        self
    }

    /// Both configured times, as written.
    pub fn times(&self) -> Option<(&str, &str)> {
        match (self.start_time.as_deref(), self.end_time.as_deref()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Window bounds in minutes since midnight, when both times parse.
    pub fn window_minutes(&self) -> Option<(u32, u32)> {
        let (start, end) = self.times()?;
        Some((parse_minutes(start)?, parse_minutes(end)?))
    }

    pub fn is_overnight(&self) -> bool {
        self.window_minutes()
            .map(|(start, end)| start > end)
            .unwrap_or(false)
    }

    /// A service without a schedule runs every day.
    pub fn is_scheduled_on(&self, day: &NaiveDate) -> bool {
        match &self.schedule {
            None => true,
            Some(dates) => {
                let key = day.format("%Y-%m-%d").to_string();
                dates.iter().any(|d| d.trim() == key)
            }
        }
    }
}
