//! CLI argument definitions for `daybook`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "daybook",
    version,
    about = "Check and render day-by-day chat programs",
    long_about = "Check and render day-by-day chat programs.\n\n\
                  A program is a directory of numbered day folders holding text\n\
                  fragments written in the chat HTML dialect, plus an optional\n\
                  navigation descriptor (msg.txt) per folder."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Config file (default: <PROGRAM_DIR>/daybook.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate every fragment and navigation message of a program.
    Check(ProgramArgs),

    /// Render one day's navigation message as JSON lines.
    Render(RenderArgs),

    /// Print the paged day-selection keyboard as JSON.
    Keyboard(KeyboardArgs),

    /// Show which day is current and which days are due.
    Schedule(ScheduleArgs),

    /// List one folder of a content tree.
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct ProgramArgs {
    /// Program directory containing numbered day folders.
    #[arg(value_name = "PROGRAM_DIR")]
    pub program_dir: PathBuf,
}

#[derive(Parser)]
pub struct RenderArgs {
    #[command(flatten)]
    pub program: ProgramArgs,

    /// Day number to render.
    #[arg(long = "day", value_name = "N")]
    pub day: u32,

    /// Also send the day's text fragments before the navigation message.
    #[arg(long = "with-content")]
    pub with_content: bool,
}

#[derive(Parser)]
pub struct KeyboardArgs {
    #[command(flatten)]
    pub program: ProgramArgs,

    /// Zero-based page to show (clamped to the last page).
    #[arg(long = "page", default_value_t = 0)]
    pub page: usize,

    /// Only offer days up to this number.
    #[arg(long = "until-day", value_name = "N")]
    pub until_day: Option<u32>,
}

#[derive(Parser)]
pub struct ScheduleArgs {
    /// First day of the program (YYYY-MM-DD).
    #[arg(long = "begin", value_name = "DATE")]
    pub begin: NaiveDate,

    /// Date to compute for (default: today, local time).
    #[arg(long = "today", value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Date of the last delivery, if any.
    #[arg(long = "last-delivered", value_name = "DATE")]
    pub last_delivered: Option<NaiveDate>,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Root of the content tree.
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Folder inside the root, `/`-separated (default: the root itself).
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,
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
