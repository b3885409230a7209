use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "carebot")]
#[command(about = "Carebot CLI - rule-based healthcare companion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session with the companion
    Chat {
        /// Session identifier (a fresh UUID if omitted)
        #[arg(long)]
        session: Option<String>,
    },
    /// Run the AI-assisted health check
    HealthCheck {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: u32,
        /// Hours of sleep per night
        #[arg(long, default_value_t = 7.0)]
        sleep_hours: f32,
        /// Stress level on a 1-10 scale
        #[arg(long, default_value_t = 5)]
        stress_level: u8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carebot=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat { session } => commands::chat::run(session)?,
        Commands::HealthCheck {
            name,
            age,
            sleep_hours,
            stress_level,
        } => commands::health_check::run(name, age, sleep_hours, stress_level)?,
    }

    Ok(())
}
