use clap::Parser;
use std::ffi::OsString;

#[derive(Debug, Clone, Parser)]
#[command(name = "record_sorter")]
#[command(about = "Sort the fixed name roster by family name and print it")]
pub struct SorterArgs {}

#[derive(Debug, Clone, Parser)]
#[command(name = "safe_divider")]
#[command(about = "Divide two integers, reporting bad input instead of failing")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct DivideArgs {
    /// Dividend, as text; parsed as a base-10 integer
    #[arg(allow_hyphen_values = true)]
    pub dividend: String,

    /// Divisor, as text; parsed as a base-10 integer
    #[arg(allow_hyphen_values = true)]
    pub divisor: String,
}

impl DivideArgs {
    /// Parses a full argv, treating every argument after the binary name as an operand.
    ///
    /// A leading `--` is inserted so that `--`, `-h` or `--help` reach the divider as text.
    pub fn parse_operands<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args
            .next()
            .unwrap_or_else(|| OsString::from("safe_divider"));

        Self::try_parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }
}
