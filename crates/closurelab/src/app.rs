//! Application entry point and demo dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use closurelab_cli::output::{format_sequence, write_to_file};
use closurelab_cli::presenter::DemoPresenter;
use closurelab_core::filter::{filter, Predicate};
use closurelab_core::generator::FibGenerator;
use closurelab_core::visit::visit;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Input for the filter demo.
const FILTER_INPUT: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Input for the visit demo.
const VISIT_INPUT: [i64; 4] = [1, 2, 3, 4];

/// The demos this binary can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Fib,
    Filter,
    Visit,
}

impl Demo {
    fn name(self) -> &'static str {
        match self {
            Self::Fib => "fib",
            Self::Filter => "filter",
            Self::Visit => "visit",
        }
    }
}

/// Resolve the `--demo` selection to the demos to run, in order.
pub fn get_demos_to_run(selection: &str) -> Result<Vec<Demo>, AppError> {
    match selection {
        "all" => Ok(vec![Demo::Fib, Demo::Filter, Demo::Visit]),
        "fib" => Ok(vec![Demo::Fib]),
        "filter" => Ok(vec![Demo::Filter]),
        "visit" => Ok(vec![Demo::Visit]),
        other => Err(AppError::UnknownDemo(other.to_string())),
    }
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        closurelab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let demos = get_demos_to_run(&config.demo)?;
    let presenter = DemoPresenter::new(config.quiet);

    for demo in demos {
        debug!("running demo: {}", demo.name());
        presenter.present_header(demo.name());
        match demo {
            Demo::Fib => run_fib(config, &presenter)?,
            Demo::Filter => run_filter(config, &presenter)?,
            Demo::Visit => run_visit(&presenter),
        }
    }

    Ok(())
}

/// First `take` values of the sequence, one per line. The last value is
/// optionally written to `--output`.
#[allow(clippy::cast_possible_truncation)]
fn run_fib(config: &AppConfig, presenter: &DemoPresenter) -> Result<()> {
    let mut last = None;
    for value in FibGenerator::new().take(config.take as usize) {
        presenter.present_line(&value.to_string());
        last = Some(value);
    }

    if let (Some(path), Some(value)) = (&config.output, &last) {
        write_to_file(path, value).with_context(|| format!("writing {path}"))?;
    }

    Ok(())
}

/// One sequence literal per selected predicate, over the fixed input 1..=9.
fn run_filter(config: &AppConfig, presenter: &DemoPresenter) -> Result<()> {
    for name in config.predicate_names() {
        let predicate: Predicate = name.parse().map_err(AppError::Predicate)?;
        let matched = filter(FILTER_INPUT, |n| predicate.matches(*n));
        presenter.present_line(&format_sequence(&matched));
    }
    Ok(())
}

/// Two passes over the fixed input, each printing the tripled element with a
/// trailing message from inside the callback.
fn run_visit(presenter: &DemoPresenter) {
    visit(&VISIT_INPUT, |n| {
        presenter.present_line(&format!("{n} - printed from the callback"));
    });

    visit(&VISIT_INPUT, |n| {
        presenter.present_line(&format!("{n} - printed from the second callback"));
    });
}
