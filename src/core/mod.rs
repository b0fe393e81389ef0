pub mod divider;
pub mod sorter;

pub use crate::domain::model::NameRecord;
pub use crate::domain::ports::ConsoleProgram;
pub use crate::utils::error::Result;
