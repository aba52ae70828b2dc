pub mod coverage;
pub mod interval;
pub mod language;
pub mod service;
pub mod shift;
pub mod snapshot;
