use crate::error::{LaunchError, Result};
use std::process::ExitStatus;
use tokio::process::Command;

/// One of the three externally defined run targets.
///
/// Each wraps an opaque collaborator: the launcher only knows how to start
/// it, never what it does with stdin, ports, or arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// FastAPI server (agent.api)
    Api,
    /// Interactive agent CLI (cli.py)
    Cli,
    /// Document ingestion pipeline (ingestion.ingest)
    Ingest,
}

impl Mode {
    /// Program and arguments for the child process
    pub fn command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Mode::Api => ("python3", &["-m", "agent.api"]),
            Mode::Cli => ("python3", &["cli.py"]),
            Mode::Ingest => ("python3", &["-m", "ingestion.ingest"]),
        }
    }

    fn print_banner(&self) {
        match self {
            Mode::Api => {
                println!("\n🚀 Starting API server...");
                println!("API will be available at http://localhost:8058");
                println!("API documentation: http://localhost:8058/docs");
                println!("Press Ctrl+C to stop\n");
            }
            Mode::Cli => println!("\n🤖 Starting CLI interface..."),
            Mode::Ingest => println!("\n📚 Starting document ingestion..."),
        }
    }
}

/// Launch the selected mode and block until the child exits.
///
/// The child inherits the calling environment and stdio. Interrupt handling
/// lives with the caller; the child shares the foreground process group, so
/// a terminal Ctrl+C reaches it directly.
pub async fn run(mode: Mode) -> Result<ExitStatus> {
    mode.print_banner();
    let (program, args) = mode.command();
    launch(program, args).await
}

async fn launch(program: &str, args: &[&str]) -> Result<ExitStatus> {
    let mut child = Command::new(program)
        .args(args)
        .spawn()
        .map_err(|e| LaunchError::Spawn(program.to_string(), e))?;

    Ok(child.wait().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_commands() {
        assert_eq!(Mode::Api.command(), ("python3", &["-m", "agent.api"][..]));
        assert_eq!(Mode::Cli.command(), ("python3", &["cli.py"][..]));
        assert_eq!(
            Mode::Ingest.command(),
            ("python3", &["-m", "ingestion.ingest"][..])
        );
    }

    #[tokio::test]
    async fn test_launch_reports_exit_status() {
        let status = launch("true", &[]).await.unwrap();
        assert!(status.success());

        let status = launch("false", &[]).await.unwrap();
        assert_eq!(status.code(), Some(1));
    }

    #[tokio::test]
    async fn test_launch_missing_program() {
        let result = launch("/nonexistent/program", &[]).await;
        match result {
            Err(LaunchError::Spawn(program, _)) => {
                assert_eq!(program, "/nonexistent/program");
            }
            other => panic!("Expected Spawn error, got {:?}", other),
        }
    }
}
