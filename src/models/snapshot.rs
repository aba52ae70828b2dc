use crate::errors::{AppError, AppResult};
use crate::models::service::ServiceWindow;
use crate::models::shift::ShiftsByGuardAndDate;

/// Read-only view of one property: its service catalog and the guards' shifts.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub property: Option<String>,
    pub services: Vec<ServiceWindow>,
    pub shifts: ShiftsByGuardAndDate,
}

impl Snapshot {
    pub fn service(&self, id: i64) -> Option<&ServiceWindow> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Resolve an optional `--service` filter against the catalog.
    pub fn select_service(&self, id: Option<i64>) -> AppResult<Option<&ServiceWindow>> {
        match id {
            None => Ok(None),
            Some(id) => self
                .service(id)
                .map(Some)
                .ok_or(AppError::ServiceNotFound(id)),
        }
    }

    pub fn shift_count(&self) -> usize {
        self.shifts
            .values()
            .flat_map(|by_date| by_date.values())
            .map(Vec::len)
            .sum()
    }
}
