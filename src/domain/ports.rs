use crate::utils::error::Result;
use std::io::Write;

/// A run-to-completion program whose only side effect is writing lines.
pub trait ConsoleProgram {
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}
