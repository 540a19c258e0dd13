use crate::curve::LookupTable;
use crate::error::ToneCurveError;

/// Append-only list of saved curve snapshots, in save order.
///
/// Snapshots are immutable copies: later edits to the active table
/// never touch what was saved. There is no deletion.
#[derive(Debug, Default)]
pub struct CurveStore {
    saved: Vec<LookupTable>,
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the given table.
    pub fn save(&mut self, table: &LookupTable) {
        self.saved.push(table.clone());
    }

    /// Fetch the snapshot at a zero-based save index.
    pub fn load(&self, index: usize) -> Result<&LookupTable, ToneCurveError> {
        self.saved.get(index).ok_or(ToneCurveError::IndexOutOfRange {
            index,
            len: self.saved.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}
