//! # ERP Console
//!
//! Thin entry point: load `.env`, configure logging, wire the application
//! context and run one command.

use std::process::ExitCode;

use clap::Parser;
use erp_console::app::AppContext;
use erp_console::cli::{self, Cli};
use erp_console::config::ConsoleConfig;
use erp_console::debug::{self, LogConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::from_env()?;
    debug::init_logger(&LogConfig::from_env(&config.log_dir));

    let ctx = AppContext::start(config)?;
    let output = cli::run(&ctx, cli.command).await?;

    if output.success {
        println!("{}", output.text);
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!(message = %output.text, "Command failed");
        eprintln!("{}", output.text);
        Ok(ExitCode::FAILURE)
    }
}
