//! meteobot CLI binary entry point.

use std::sync::Arc;

use clap::Parser;
use meteobot::actions::ActionRequest;
use meteobot::cli::{console, Cli, Commands, InvokeArgs, LogFormat};
use meteobot::config::BotConfig;
use meteobot::runtime::{Bot, ConsoleActivitySink};
use tracing_subscriber::EnvFilter;

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let result = match cli.command {
        Commands::Tools => print_tools(),
        Commands::Invoke(args) => handle_invoke(args).await,
        Commands::ServeStdin => handle_serve_stdin().await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_bot() -> Result<Bot, Box<dyn std::error::Error>> {
    let config = Arc::new(BotConfig::from_env()?);
    tracing::info!(config = ?config, "configuration loaded");
    Ok(Bot::new(config)?)
}

fn print_tools() -> Result<(), Box<dyn std::error::Error>> {
    let definitions = meteobot::tools::definitions();
    println!("{}", serde_json::to_string_pretty(&definitions)?);
    Ok(())
}

async fn handle_invoke(args: InvokeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let arguments: serde_json::Value = serde_json::from_str(&args.args)
        .map_err(|e| format!("--args is not valid JSON: {e}"))?;
    let bot = load_bot()?;

    let request = ActionRequest::new(args.action, arguments);
    if let Some(json) = bot.invoke_action(&ConsoleActivitySink, &request).await {
        println!("{json}");
    }
    Ok(())
}

async fn handle_serve_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let bot = load_bot()?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    tokio::select! {
        served = console::serve_lines(&bot, &ConsoleActivitySink, stdin, stdout) => served?,
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted; abandoning in-flight turn"),
    }
    Ok(())
}
