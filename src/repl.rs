//! Interactive driver loop
//!
//! Reads one line at a time and runs it through the pipeline as an
//! independent compilation unit; bindings are not retained across lines.
//! A literal `exit` line or end of input terminates the loop.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::common::{LogLevel, RunConfig};
use crate::diagnostics::SourceFile;

pub fn run(log_level: LogLevel) -> rustyline::Result<()> {
    println!("Declan v{}", crate::VERSION);
    println!("Type 'exit' to quit");

    let config = RunConfig {
        echo: true,
        log_level,
    };

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line == "exit" {
                    break;
                }
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                let source = SourceFile::new("<repl>", line);
                if let Err(diagnostic) = crate::run(&source, &config) {
                    diagnostic.emit();
                }
                // The unit's diagnostic dies here; the next line starts clean
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(())
}
