//! CLI argument definitions for the timeline followback host.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tlfb_model::{Field, PropertiesPatch};

#[derive(Parser)]
#[command(
    name = "tlfb",
    version,
    about = "Timeline Followback - session properties from REDCap links",
    long_about = "Run the timeline followback session startup against a URL.\n\n\
                  Reads subject, record, event, project, reportable period, key field,\n\
                  and staff from the query string, reports alerts and missing values,\n\
                  and prints the rewritten shareable URL."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include participant identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start a session from a URL and print the resulting state.
    Start(StartArgs),

    /// Start a session, then apply a manual form update.
    Update(UpdateArgs),

    /// List the substance checklist.
    Substances,
}

#[derive(Args)]
pub struct StartArgs {
    /// Page URL or bare query string (e.g. "?subject=QO10A&pid=28955").
    #[arg(value_name = "URL")]
    pub url: String,

    /// Window height in pixels (overrides the config file).
    #[arg(long = "window-height", value_name = "PX")]
    pub window_height: Option<u32>,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub start: StartArgs,

    #[arg(long = "record", value_name = "ID")]
    pub record: Option<String>,

    #[arg(long = "pid", value_name = "ID")]
    pub pid: Option<String>,

    /// Study event (stored as the timepoint).
    #[arg(long = "event", value_name = "EVENT")]
    pub event: Option<String>,

    #[arg(long = "subject", value_name = "SUBJECT")]
    pub subject: Option<String>,

    /// Start of the reportable period (YYYY-MM-DD).
    #[arg(long = "start", value_name = "DATE")]
    pub start_date: Option<String>,

    /// End of the reportable period (YYYY-MM-DD).
    #[arg(long = "end", value_name = "DATE")]
    pub end_date: Option<String>,

    #[arg(long = "keyfield", value_name = "FIELD")]
    pub keyfield: Option<String>,

    #[arg(long = "staff", value_name = "INITIALS")]
    pub staff: Option<String>,
}

impl UpdateArgs {
    /// Collect the given flags into a patch.
    pub fn patch(&self) -> PropertiesPatch {
        let mut patch = PropertiesPatch::new();
        let values = [
            (Field::Record, &self.record),
            (Field::Pid, &self.pid),
            (Field::Timepoint, &self.event),
            (Field::Subject, &self.subject),
            (Field::Start, &self.start_date),
            (Field::End, &self.end_date),
            (Field::Keyfield, &self.keyfield),
            (Field::Staff, &self.staff),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                patch.set(field, value.as_str());
            }
        }
        patch
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
