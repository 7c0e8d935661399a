//! CLI domain: parse, route, output, and presentation only.
//! The comparison itself lives in `coverage`; this layer only adapts it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{format_report, format_report_json, format_report_text};
pub use route::{RunContext, RunOutcome, EXIT_ERROR, EXIT_MISSING};
