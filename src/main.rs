//! avro-decorator CLI - decode Avro Kafka payloads through a schema registry
//!
//! Usage: avro-decorator <COMMAND>
//!
//! Commands:
//!   decorate  Decode one message payload (prompts once for an unknown cluster)
//!   config    Inspect or change stored schema registry endpoints

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use avro_decorator::DecoratorSettings;

mod cli;
mod commands;
mod telemetry;

use cli::{Cli, Commands};
use commands::decorate::DecorateArgs;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let settings = DecoratorSettings::from_env().with_overrides(cli.properties, cli.no_prompt);
    tracing::debug!(
        path = %settings.properties_path.display(),
        interactive = settings.interactive,
        "settings resolved"
    );

    match cli.command {
        Commands::Decorate {
            cluster,
            topic,
            broker,
            partition,
            offset,
            hex,
            file,
        } => commands::decorate::cmd_decorate(
            &settings,
            DecorateArgs {
                cluster,
                topic,
                broker,
                partition,
                offset,
                hex,
                file,
            },
            cli.json,
        ),
        Commands::Config { action } => commands::config::cmd_config(&settings, action, cli.json),
    }
}
