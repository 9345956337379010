use crate::dispatch::Mode;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Outcome of the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Run(Mode),
    Exit,
}

/// Present the numeric run-mode menu and read a choice.
///
/// Empty input defaults to the API server. Anything outside 1-4 prints a
/// complaint and re-prompts; end-of-input is treated as an exit request so a
/// closed stdin never spins.
pub fn prompt(input: &mut impl BufRead, output: &mut impl Write) -> Result<MenuChoice> {
    loop {
        writeln!(output, "\nWhat would you like to run?")?;
        writeln!(output, "1. API Server (default)")?;
        writeln!(output, "2. CLI Interface")?;
        writeln!(output, "3. Document Ingestion")?;
        writeln!(output, "4. Exit")?;
        write!(output, "\nEnter your choice (1-4) [1]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(MenuChoice::Exit);
        }

        match line.trim() {
            "" | "1" => return Ok(MenuChoice::Run(Mode::Api)),
            "2" => return Ok(MenuChoice::Run(Mode::Cli)),
            "3" => return Ok(MenuChoice::Run(Mode::Ingest)),
            "4" => return Ok(MenuChoice::Exit),
            other => writeln!(output, "Invalid choice: {}. Please try again.", other)?,
        }
    }
}
