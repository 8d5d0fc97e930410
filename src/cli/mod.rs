//! CLI entry point for meteobot.

pub mod console;

use clap::{Parser, Subcommand};
use strum::{Display, EnumString};

/// Weather and quote actions for an assistant planner
#[derive(Parser, Debug)]
#[command(name = "meteobot", version, about = "meteobot: weather, forecast and quote actions")]
pub struct Cli {
    /// Log output format (compact, pretty, json)
    #[arg(long, global = true, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Dispatch one action and print its JSON result
    Invoke(InvokeArgs),
    /// Print the function-tool definitions for the assistant
    Tools,
    /// Read action requests and feedback events from stdin, one JSON per line
    ServeStdin,
}

/// Arguments for `meteobot invoke`.
#[derive(Parser, Debug)]
pub struct InvokeArgs {
    /// Action name (getCurrentWeather, get5DayForecast, getQuoteOfTheDay)
    pub action: String,

    /// Arguments as a JSON object, e.g. '{"location":"Oslo"}'
    #[arg(short, long, default_value = "{}")]
    pub args: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}
