//! # Session Runner
//!
//! Drives one program run. Both modes funnel into the same generate step:
//! build a prompt from the whole accumulated context, invoke the model once,
//! print the result framed by banner lines, and append it to the output file
//! when one was configured.
//!
//! - **Batch mode**: the context is the given files' contents, newline-joined
//!   in argument order, and exactly one generate step runs. A file that cannot
//!   be read aborts the run before any invocation.
//! - **Interactive mode**: every stdin line grows the context by a
//!   newline-prefixed line and triggers a generate step, until the sentinel
//!   line or end of input.

use std::{
    fs::{self, OpenOptions},
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use color_eyre::{Result, eyre::WrapErr};
use log::debug;

use crate::{InvokerBox, invoke::Invocation, prompt};

/// Typing this line (after whitespace trimming) ends interactive input.
pub const SENTINEL: &str = "THE END";

const RESULT_HEADER: &str = "--- Generated Stable Diffusion Parameters ---";
const RESULT_FOOTER: &str = "--- End --------------------------------------";

pub struct Session {
    invoker: InvokerBox,
    context: String,
    output_path: Option<PathBuf>,
}

impl Session {
    pub fn new(invoker: InvokerBox, output_path: Option<PathBuf>) -> Self {
        Self {
            invoker,
            context: String::new(),
            output_path,
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Reads all files up front, joins them in argument order, and runs a
    /// single generate step. Any unreadable file fails the run with no
    /// invocation attempted.
    pub fn run_batch(&mut self, files: &[PathBuf], out: &mut impl Write) -> Result<()> {
        let mut contents = Vec::with_capacity(files.len());
        for file in files {
            let text = fs::read_to_string(file)
                .wrap_err_with(|| format!("Error reading input files: {}", file.display()))?;
            contents.push(text);
        }

        self.context = contents.join("\n");
        self.generate(out)
    }

    pub fn run_interactive(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "Enter lines of description (type '{SENTINEL}' on a line by itself to finish):"
        )?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line == SENTINEL {
                break;
            }

            self.context.push('\n');
            self.context.push_str(line);
            self.generate(out)?;
        }

        writeln!(out, "Program terminated. No further input will be processed.")?;
        Ok(())
    }

    fn generate(&mut self, out: &mut impl Write) -> Result<()> {
        let prompt = prompt::build(&self.context);
        debug!("built {} byte prompt", prompt.len());
        let result = self.invoker.invoke(&prompt);

        writeln!(out, "\n{RESULT_HEADER}")?;
        writeln!(out, "{}", result.text())?;
        writeln!(out, "{RESULT_FOOTER}\n")?;

        if let Some(path) = &self.output_path
            && let Err(err) = append_result(path, result.text())
        {
            // reported but never fatal, the run keeps its exit code
            writeln!(out, "Failed to write output to {}: {err}", path.display())?;
        }

        Ok(())
    }
}

fn append_result(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{text}")
}
