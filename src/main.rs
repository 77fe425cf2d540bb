use anyhow::Result;
use clap::Parser;
use scatterview::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Run the main application logic from the library
    if let Err(e) = scatterview::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
