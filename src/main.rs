// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Hand them to html_checker::run, which loads the page and the checks
// 3. Print the results as JSON
// 4. Exit with proper code (0 = ran fine, even if checks are missing; 1 = error)
// =============================================================================

use anyhow::Result;
use clap::Parser;

use html_checker::cli::Cli;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // Nothing has been written to stdout at this point
            eprintln!("Error: {}. Exiting.", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    html_checker::init_logging(cli.verbose);

    let results = html_checker::run(&cli).await?;
    println!("{}", html_checker::to_pretty_json(&results)?);
    Ok(())
}
