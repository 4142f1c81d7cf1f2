use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobpath::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobpath=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let workspace = cli::commands::workspace_from_args(&cli.workspace)?;

    match cli.command {
        Commands::Init { script, force } => cli::commands::init(&script, force),
        Commands::Show { script, format } => cli::commands::show(&script, &workspace, format),
        Commands::Name { script } => cli::commands::name(&script, &workspace),
        Commands::Path { script } => cli::commands::path(&script),
        Commands::Set {
            script,
            name,
            folder,
            params,
            interactive_input_override,
        } => cli::commands::set(&script, name, folder, params, interactive_input_override),
    }
}
