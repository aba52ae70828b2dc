pub mod calculator;
pub mod calendar;
pub mod config;
pub mod logic;
