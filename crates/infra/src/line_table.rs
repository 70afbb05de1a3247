//! In-memory line table for tests and dev tooling.

use vireo_fulfillment::{LineKey, LineTable};

/// One row of the in-memory table.
///
/// Output fields are `None` until written, which lets tests distinguish
/// "never written" from "written empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLine {
    pub key: Option<LineKey>,
    pub expiration_dates: Option<String>,
    pub lot_numbers: Option<String>,
}

/// Vec-backed `LineTable` mirroring the host record's item sublist.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLineTable {
    lines: Vec<InMemoryLine>,
}

impl InMemoryLineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line; `None` models a line without an item assigned.
    pub fn push(&mut self, key: Option<LineKey>) {
        self.lines.push(InMemoryLine {
            key,
            ..InMemoryLine::default()
        });
    }

    /// Append a line whose output columns already hold values, as after a
    /// manual edit or a previous reconciliation run.
    pub fn push_with_outputs(
        &mut self,
        key: Option<LineKey>,
        expiration_dates: Option<String>,
        lot_numbers: Option<String>,
    ) {
        self.lines.push(InMemoryLine {
            key,
            expiration_dates,
            lot_numbers,
        });
    }

    pub fn line(&self, index: usize) -> Option<&InMemoryLine> {
        self.lines.get(index)
    }
}

impl LineTable for InMemoryLineTable {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_key(&self, index: usize) -> Option<LineKey> {
        self.lines.get(index).and_then(|line| line.key.clone())
    }

    fn set_expiration_dates(&mut self, index: usize, value: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.expiration_dates = Some(value.to_string());
        }
    }

    fn set_lot_numbers(&mut self, index: usize, value: &str) {
        if let Some(line) = self.lines.get_mut(index) {
            line.lot_numbers = Some(value.to_string());
        }
    }
}
