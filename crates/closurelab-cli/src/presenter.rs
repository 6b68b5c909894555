//! Demo output presenter.

use tracing::debug;

/// Presents demo output on stdout, errors on stderr.
///
/// Payload lines are always printed; headers are cosmetic and suppressed in
/// quiet mode so the payload stays machine-readable.
pub struct DemoPresenter {
    quiet: bool,
}

impl DemoPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a section header for the named demo.
    pub fn present_header(&self, demo: &str) {
        if self.quiet {
            return;
        }
        println!("--- {demo} ---");
    }

    /// Print one payload line.
    pub fn present_line(&self, line: &str) {
        println!("{line}");
    }

    /// Print an error.
    pub fn present_error(&self, error: &str) {
        debug!("presenting error: {error}");
        eprintln!("Error: {error}");
    }
}
