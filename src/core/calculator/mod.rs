pub mod day;
pub mod describe;
pub mod footer;
pub mod gaps;

pub use day::{day_gaps, get_day_coverage_info};
pub use footer::get_combined_footer_gaps;
pub use gaps::compute_service_gaps;
