//! # closurelab-cli
//!
//! CLI output formatting, demo presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use presenter::DemoPresenter;
