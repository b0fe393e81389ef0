use std::num::ParseIntError;
use thiserror::Error;

pub const INCORRECT_TYPE_MESSAGE: &str = "Incorrect type of data!!";
pub const DIVIDED_BY_ZERO_MESSAGE: &str = "Divided by zero!!";

#[derive(Error, Debug)]
pub enum SnippetError {
    #[error("Operand {input:?} is not an integer: {source}")]
    IncorrectType {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Cannot divide {dividend} by zero")]
    DividedByZero { dividend: i32 },

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl SnippetError {
    /// Line shown to the user on stdout when the error is recovered.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SnippetError::IncorrectType { .. } => INCORRECT_TYPE_MESSAGE.to_string(),
            SnippetError::DividedByZero { .. } => DIVIDED_BY_ZERO_MESSAGE.to_string(),
            SnippetError::Output(e) => format!("Failed to write output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetError>;
