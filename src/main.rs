use clap::Parser;
use soc_dashboard::{app::App, settings::Config};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "soc-dashboard")]
#[command(about = "TUI security-operations dashboard driven by simulated telemetry")]
struct Cli {
    #[arg(short, long, help = "Configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Seed for the simulation RNG")]
    seed: Option<u64>,

    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::init();
    }

    // Load configuration (defaults when no file is given)
    let config = match cli.config {
        Some(path) => Config::load_from_file(&path)?,
        None => Config::default(),
    };
    config.validate()?;

    // Unseeded runs vary per launch; seeded runs replay the same telemetry
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    println!("Starting SOC Dashboard (seed: {})...", seed);
    println!("Press 'q' to quit, Tab or 1-3 to switch between views");

    let mut app = App::new(config, seed);

    if let Err(e) = app.run() {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }

    println!("SOC Dashboard stopped.");
    Ok(())
}
