//! cstrip - CLI entry point

mod commands;

use std::process::ExitCode;

use clap::Parser;

use cstrip::cli::Cli;
use cstrip::Theme;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::clean::handle_clean(&cli) {
        Ok(code) => code,
        Err(err) => {
            let theme = Theme::detect(!cli.no_color);
            eprintln!("{}", theme.error_line(&format!("{:#}", err)));
            commands::EXIT_USAGE.into()
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
