pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{DivideArgs, SorterArgs};

pub use core::{divider::SafeDivider, sorter::RecordSorter};
pub use domain::{model::NameRecord, ports::ConsoleProgram};
pub use utils::error::{Result, SnippetError};
