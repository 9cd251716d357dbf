use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{error, info};

mod cli;

use cli::{render_view, Cli, Commands};
use wishlist_admin::{
    api::HttpWishlistApi,
    binder::{Action, ActionOutcome, FormBinder},
    config::Config,
    tui,
};

/// Exit status for a request the client refused to send
const EXIT_VALIDATION: i32 = 2;
/// Exit status for a request the service rejected
const EXIT_FAILED: i32 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "wishlist_admin=info,wishlist=info");
    }

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url);
    }

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_logging(&config.log_file, false)?;
            config.validate()?;
            info!("Launching TUI interface");
            tui::run_tui(&config).await?;
        }
        command => {
            init_logging(&config.log_file, true)?;
            config.validate()?;
            let code = run_command(&command, &config).await?;
            if code != 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}

/// Log to the configured file, and to stderr as well outside the TUI
fn init_logging(log_file: &Path, to_stderr: bool) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let directory = log_file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", log_file.display()))?;
    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::from_default_env())
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    Ok(())
}

/// Run one binder action and print the resulting view
async fn run_command(command: &Commands, config: &Config) -> Result<i32> {
    let Some(action) = command.action() else {
        return Ok(0);
    };

    let api = HttpWishlistApi::new(config)?;
    let mut binder = FormBinder::new(api);
    command.fill_view(binder.view_mut());

    if command.needs_preload() {
        info!("Loading the stored wishlist before updating it");
        match binder.perform(Action::Retrieve).await {
            Ok(ActionOutcome::Success) => command.fill_view(binder.view_mut()),
            Ok(ActionOutcome::Failed(message)) => {
                error!("Could not load wishlist: {}", message);
                println!("{}", render_view(binder.view(), command.wants_html()));
                return Ok(EXIT_FAILED);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_VALIDATION);
            }
        }
    }

    let code = match binder.perform(action).await {
        Ok(ActionOutcome::Success) => 0,
        Ok(ActionOutcome::Failed(message)) => {
            error!("{} failed: {}", action.label(), message);
            EXIT_FAILED
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_VALIDATION);
        }
    };

    println!("{}", render_view(binder.view(), command.wants_html()));
    Ok(code)
}
