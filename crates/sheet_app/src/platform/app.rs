use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use log::LevelFilter;
use serde_json::Value;
use sheet_core::{
    format_date_time, format_file_size, generate_id, is_valid_email, truncate, LoadingIndicator,
    Notification, NotificationContainer,
};
use sheet_engine::Page;
use sheet_logging::{sheet_debug, LogDestination};

use super::settings::{load_settings, write_default_settings};
use super::terminal::TerminalContainer;
use crate::{Cli, Command, LogTarget};

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if !sheet_logging::initialize(map_log_target(cli.log), level, None) {
        eprintln!("Warning: logging is disabled for this run");
    }

    let settings = load_settings(&cli.config);
    sheet_debug!("Settings: {:?}", settings);

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(async move {
        let container: Arc<dyn NotificationContainer> = Arc::new(TerminalContainer::new());
        let page = Page::new(&settings, Some(container)).context("building page context")?;
        page.on_ready();
        run_command(&page, &cli.config, cli.command).await
    })
}

async fn run_command(page: &Page, config: &Path, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Size { bytes } => println!("{}", format_file_size(bytes)),
        Command::Truncate { text, length } => println!("{}", truncate(&text, length)),
        Command::Email { address } => println!("{}", is_valid_email(&address)),
        Command::Date { value } => println!("{}", format_date_time(&value)),
        Command::Id { count } => {
            for _ in 0..count {
                println!("{}", generate_id());
            }
        }
        Command::Loader { message } => println!("{}", LoadingIndicator::new(message).to_html()),
        Command::Notify { message, severity } => {
            if let Some(id) = page.notify(message.clone(), severity) {
                println!("{}", Notification::new(id, message, severity).to_html());
            }
        }
        Command::Request { url, method, data } => {
            let data = data
                .map(|raw| serde_json::from_str::<Value>(&raw))
                .transpose()
                .context("--data is not valid JSON")?;
            let reply = page.api_call(&url, method, data.as_ref()).await?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Copy { text } => page.copy_to_clipboard(&text).await,
        Command::InitConfig { force } => {
            write_default_settings(config, force)
                .with_context(|| format!("writing {:?}", config))?;
            println!("{}", config.display());
        }
    }
    Ok(())
}

fn map_log_target(target: LogTarget) -> LogDestination {
    match target {
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::File => LogDestination::File,
        LogTarget::Both => LogDestination::Both,
    }
}
