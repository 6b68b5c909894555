//! Application configuration from CLI flags and environment.

use clap::Parser;

/// closurelab — closure and higher-order function demos.
#[derive(Parser, Debug)]
#[command(name = "closurelab", version, about)]
pub struct AppConfig {
    /// Demo to run: fib, filter, visit, or all.
    #[arg(long, default_value = "all", env = "CLOSURELAB_DEMO")]
    pub demo: String,

    /// How many values the fib demo prints.
    #[arg(long, default_value = "10", env = "CLOSURELAB_TAKE")]
    pub take: u64,

    /// Comma-separated predicates the filter demo applies, in order.
    #[arg(long, default_value = "even,odd,mult3")]
    pub predicates: String,

    /// Quiet mode (payload lines only, no headers).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write the fib demo's last value to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Predicate names from the comma-separated flag, trimmed, empties
    /// dropped.
    #[must_use]
    pub fn predicate_names(&self) -> Vec<&str> {
        self.predicates
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
