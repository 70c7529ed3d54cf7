use clap::Parser;
use rolodex_app::cli::{Cli, Commands};
use rolodex_app::commands;
use rolodex_core::config::load_config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    match cli.command {
        Commands::Check { file, json } => {
            let input = commands::read_input(&file, &config)?;
            let report = commands::check(&input);
            println!("{}", report.render(json)?);
            if !report.valid {
                std::process::exit(1);
            }
        }
        Commands::Normalize { file } => {
            let input = commands::read_input(&file, &config)?;
            print!("{}", commands::normalize(&input)?);
        }
        Commands::New(args) => {
            let card = commands::new_card(&args, &config)?;
            print!("{}", card.serialize());
        }
    }

    Ok(())
}
