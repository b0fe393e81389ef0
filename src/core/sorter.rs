use crate::core::{ConsoleProgram, NameRecord};
use crate::domain::model::default_roster;
use crate::utils::error::Result;
use std::io::Write;

/// Stable sort by family name; records sharing a family name keep their input order.
pub fn sort_by_family_name(records: &mut [NameRecord]) {
    records.sort_by(NameRecord::by_family_name);
}

pub fn render_lines(records: &[NameRecord]) -> Vec<String> {
    records.iter().map(ToString::to_string).collect()
}

/// Sorts a roster of records and prints one record per line.
#[derive(Debug, Clone)]
pub struct RecordSorter {
    roster: Vec<NameRecord>,
}

impl RecordSorter {
    pub fn new(roster: Vec<NameRecord>) -> Self {
        Self { roster }
    }

    pub fn sorted(&self) -> Vec<NameRecord> {
        let mut records = self.roster.clone();
        sort_by_family_name(&mut records);
        records
    }
}

impl Default for RecordSorter {
    fn default() -> Self {
        Self::new(default_roster())
    }
}

impl ConsoleProgram for RecordSorter {
    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let sorted = self.sorted();
        tracing::debug!("Sorted {} records by family name", sorted.len());

        for line in render_lines(&sorted) {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}
