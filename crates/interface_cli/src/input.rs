//! Console input helpers
//!
//! Thin wrappers over `BufRead` that prompt, trim, and parse. An exhausted
//! input stream is the one unrecoverable condition in the interface layer
//! and surfaces as an error from here.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Prompts and reads one trimmed line
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").context("failed to write prompt")?;
    output.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        bail!("input stream closed");
    }
    Ok(line.trim().to_string())
}

/// Prompts until the input parses, re-prompting on garbage
pub fn prompt_parse<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<T> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(output, "Invalid input, please try again.")?;
            }
        }
    }
}

/// Prompts for an optional value; blank input yields `None`
pub fn prompt_optional<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<T>> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => {
                writeln!(output, "Invalid input, please try again.")?;
            }
        }
    }
}
