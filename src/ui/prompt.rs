//! Line-mode operator prompts.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
/// Anything but `y`/`yes` (case-insensitive) is a no, EOF included.
pub fn confirm(question: &str) -> AppResult<bool> {
    let stdin = io::stdin();
    confirm_with(question, &mut stdin.lock(), &mut io::stdout())
}

pub fn confirm_with<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> AppResult<bool> {
    write!(output, "{question} (y/N): ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
