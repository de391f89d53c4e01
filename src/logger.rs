//! Logging setup.
//!
//! Under GitHub Actions every event is written to stdout as a workflow
//! command (`::debug::`, `::warning::`, `::error::`) so the runner can
//! annotate the run; the runner itself hides `::debug::` lines unless step
//! debugging is enabled. Elsewhere the regular `fmt` output goes to stderr.

use std::fmt;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding `EnvFilter` directives.
pub const LOG_VAR: &str = "ISSUEBOT_LOG";

pub fn init(ci: bool) -> anyhow::Result<()> {
    let default = if ci {
        "warn,issuebot=debug"
    } else {
        "warn,issuebot=info"
    };
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(default));
    let res = if ci {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stdout)
            .event_format(WorkflowCommands)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::env::var_os("DISABLE_COLOR").is_none())
            .try_init()
    };
    res.map_err(|e| anyhow::anyhow!(e))
}

/// Formats events as GitHub workflow commands.
pub struct WorkflowCommands;

impl<S, N> FormatEvent<S, N> for WorkflowCommands
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.format_fields(Writer::new(&mut message), event)?;
        writeln!(
            writer,
            "{}",
            workflow_command(*event.metadata().level(), &message)
        )
    }
}

/// Renders one log line for the Actions runner.
///
/// Info lines are printed as-is; the other levels become single-line
/// commands with the message escaped.
pub fn workflow_command(level: Level, message: &str) -> String {
    let command = match level {
        Level::ERROR => "error",
        Level::WARN => "warning",
        Level::INFO => return message.to_string(),
        _ => "debug",
    };
    let mut line = format!("::{command}::");
    for c in message.chars() {
        match c {
            '%' => line.push_str("%25"),
            '\r' => line.push_str("%0D"),
            '\n' => line.push_str("%0A"),
            c => line.push(c),
        }
    }
    line
}
