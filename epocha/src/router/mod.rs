pub mod analyze;
pub mod samples;
