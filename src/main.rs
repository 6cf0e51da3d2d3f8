//! newsdesk - terminal client for the AI News Aggregator
//!
//! This is the binary entry point. Without a command it starts the TUI;
//! `ask`, `subscribe` and `summary` run one request headless.

mod headless;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use newsdesk_app::config::{self, Settings, SettingsOverrides};
use newsdesk_app::Route;
use newsdesk_core::logging;

use headless::HeadlessCommand;

/// newsdesk - AI news digests, summaries and chat in the terminal
#[derive(Parser, Debug)]
#[command(name = "newsdesk", version)]
#[command(about = "A terminal client for the AI News Aggregator", long_about = None)]
struct Args {
    /// Initial route for the TUI: /, /subscribe, /chat or /summarize
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Settings file (default <config_dir>/newsdesk/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override api.subscribe_url
    #[arg(long, value_name = "URL")]
    subscribe_url: Option<String>,

    /// Override api.assistant_url
    #[arg(long, value_name = "URL")]
    assistant_url: Option<String>,

    /// Override chat.backend
    #[arg(long, value_name = "NAME")]
    backend: Option<String>,

    /// Headless commands emit NDJSON events
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the chatbot one question and print the reply
    Ask {
        #[arg(value_name = "QUESTION")]
        question: String,
    },
    /// Subscribe an address to the weekly digest
    Subscribe {
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Print the latest news summary as markdown
    Summary,
}

impl From<Command> for HeadlessCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Ask { question } => HeadlessCommand::Ask { question },
            Command::Subscribe { email } => HeadlessCommand::Subscribe { email },
            Command::Summary => HeadlessCommand::Summary,
        }
    }
}

impl Args {
    /// File settings with command-line overrides applied
    fn settings(&self) -> Settings {
        let path = self.config.clone().or_else(config::default_config_path);
        let settings = match path {
            Some(path) => config::load_settings(&path),
            None => Settings::default(),
        };
        settings.with_overrides(SettingsOverrides {
            subscribe_url: self.subscribe_url.clone(),
            assistant_url: self.assistant_url.clone(),
            backend: self.backend.clone(),
        })
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;
    let settings = args.settings();

    match args.command {
        None => {
            let route = Route::from_path(&args.route);
            newsdesk_tui::run(settings, route).await?;
        }
        Some(command) => {
            let success = headless::run_headless(settings, command.into(), args.json).await?;
            if !success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
