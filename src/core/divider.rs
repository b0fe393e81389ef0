use crate::core::ConsoleProgram;
use crate::utils::error::{
    Result, SnippetError, DIVIDED_BY_ZERO_MESSAGE, INCORRECT_TYPE_MESSAGE,
};
use std::fmt;
use std::io::Write;

pub fn parse_operand(input: &str) -> Result<i32> {
    input
        .parse::<i32>()
        .map_err(|source| SnippetError::IncorrectType {
            input: input.to_string(),
            source,
        })
}

/// Truncating division. `i32::MIN / -1` wraps instead of failing.
pub fn divide(dividend: i32, divisor: i32) -> Result<i32> {
    if divisor == 0 {
        return Err(SnippetError::DividedByZero { dividend });
    }
    Ok(dividend.wrapping_div(divisor))
}

/// Parses both operands, then divides. The first failing step wins.
pub fn safe_divide(dividend: &str, divisor: &str) -> Result<i32> {
    let a = parse_operand(dividend)?;
    tracing::debug!(dividend = a, "Parsed dividend");
    let b = parse_operand(divisor)?;
    tracing::debug!(divisor = b, "Parsed divisor");
    divide(a, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisionOutcome {
    Quotient(i32),
    IncorrectType,
    DividedByZero,
}

impl fmt::Display for DivisionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionOutcome::Quotient(q) => write!(f, "the result is {}", q),
            DivisionOutcome::IncorrectType => f.write_str(INCORRECT_TYPE_MESSAGE),
            DivisionOutcome::DividedByZero => f.write_str(DIVIDED_BY_ZERO_MESSAGE),
        }
    }
}

/// Divides two textual operands and reports a single line, never failing on bad input.
#[derive(Debug, Clone)]
pub struct SafeDivider {
    dividend: String,
    divisor: String,
}

impl SafeDivider {
    pub fn new(dividend: impl Into<String>, divisor: impl Into<String>) -> Self {
        Self {
            dividend: dividend.into(),
            divisor: divisor.into(),
        }
    }

    /// Recovers format and zero-divisor errors into an outcome; anything else propagates.
    pub fn report(&self) -> Result<DivisionOutcome> {
        match safe_divide(&self.dividend, &self.divisor) {
            Ok(q) => Ok(DivisionOutcome::Quotient(q)),
            Err(e @ SnippetError::IncorrectType { .. }) => {
                tracing::warn!("Recovered from division error: {}", e);
                Ok(DivisionOutcome::IncorrectType)
            }
            Err(e @ SnippetError::DividedByZero { .. }) => {
                tracing::warn!("Recovered from division error: {}", e);
                Ok(DivisionOutcome::DividedByZero)
            }
            Err(e) => Err(e),
        }
    }
}

impl ConsoleProgram for SafeDivider {
    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let outcome = self.report()?;
        writeln!(out, "{}", outcome)?;
        out.flush()?;
        Ok(())
    }
}
