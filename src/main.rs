use anyhow::Result;
use clap::Parser;
use raglaunch::config::Settings;
use raglaunch::dispatch::{self, Mode};
use raglaunch::menu::{self, MenuChoice};
use raglaunch::probe;
use std::io;
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "raglaunch")]
#[command(about = "Local development runner for the Agentic RAG Knowledge Graph")]
struct Args {
    /// Run this mode directly instead of showing the menu
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logger from environment variable or default to info level
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();

    println!("=== Agentic RAG Knowledge Graph - Local Runner ===\n");

    // A user interrupt anywhere in the flow is a graceful stop, not an error.
    // The child (if any) shares the foreground process group and receives
    // the same SIGINT, so there is nothing to tear down here.
    tokio::select! {
        result = run(args) => match result {
            Ok(code) => code,
            Err(e) => {
                eprintln!("\n❌ Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            println!("\n\n👋 Shutting down gracefully...");
            // Exit without waiting on the runtime: the menu thread may still
            // be parked in a stdin read that would stall a normal shutdown.
            std::process::exit(0);
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    log::info!("Checking environment configuration...");
    let settings = match Settings::load(Path::new(".")) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("\n⚠️  Please fix the environment configuration and try again.");
            return Ok(ExitCode::FAILURE);
        }
    };
    log::info!("✓ Environment configuration looks good");

    if let Err(e) = probe::check_services(&settings).await {
        log::error!("{}", e);
        eprintln!("\n⚠️  Please make sure all required services are running.");
        eprintln!("You can use docker compose to start them:");
        eprintln!("  docker compose up postgres neo4j ollama -d");
        return Ok(ExitCode::FAILURE);
    }

    let choice = match args.mode {
        Some(mode) => MenuChoice::Run(mode),
        // The menu blocks on stdin, so it runs on a blocking thread to keep
        // the Ctrl+C branch in main responsive.
        None => {
            tokio::task::spawn_blocking(|| {
                let stdin = io::stdin();
                menu::prompt(&mut stdin.lock(), &mut io::stdout())
            })
            .await??
        }
    };

    match choice {
        MenuChoice::Exit => {
            println!("Goodbye!");
            Ok(ExitCode::SUCCESS)
        }
        MenuChoice::Run(mode) => {
            let status = dispatch::run(mode).await?;
            if let Some(code) = status.code() {
                log::info!("Child process exited with status {}", code);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
