//! Console walkthrough for the zoo species API.
//!
//! Runs the four CRUD steps in order against the configured base address,
//! printing the report to stdout. Diagnostics go to stderr via tracing so
//! the report stays clean.

use std::io::{self, BufRead, Write};

use clap::Parser;
use especies_apitest::UreqTransport;
use especies_core::{walkthrough, SpeciesClient};

#[derive(Parser)]
#[command(name = "especies-apitest", about = "CRUD smoke test for the species API")]
#[command(version, long_about = None)]
struct Cli {
    /// Base address of the API.
    #[arg(long, default_value = "https://localhost:7011/")]
    base_url: String,

    /// Relative path of the species collection.
    #[arg(long, default_value = "api/Especies")]
    resource_path: String,

    /// Skip the final "press Enter" prompt.
    #[arg(long)]
    no_pause: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let client = SpeciesClient::new(&cli.base_url, &cli.resource_path);
    let mut transport = UreqTransport::new();
    let mut stdout = io::stdout();

    let result = walkthrough::run(&client, &mut transport, &mut stdout);

    if let Err(e) = &result {
        println!("Ocurrió un error: {e}");
    }

    if !cli.no_pause {
        println!();
        print!("Presione Enter para finalizar...");
        let _ = stdout.flush();
        let _ = io::stdin().lock().read_line(&mut String::new());
    }

    if result.is_err() {
        std::process::exit(1);
    }
}
