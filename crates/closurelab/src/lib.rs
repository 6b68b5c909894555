//! closurelab library — application logic for the demo binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
