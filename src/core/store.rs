//! In-memory row store: the ordered collection of records of one workbook.

use crate::models::{Record, RecordId};

#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<Record>,
    next_id: RecordId,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RowStore {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Reserve a fresh id. Ids only grow, so a deleted id is never handed out again.
    pub fn allocate_id(&mut self) -> RecordId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert at the top of the grid.
    pub fn prepend(&mut self, record: Record) {
        self.bump_past(record.id);
        self.rows.insert(0, record);
    }

    /// Insert at the bottom of the grid (used by import).
    pub fn append(&mut self, record: Record) {
        self.bump_past(record.id);
        self.rows.push(record);
    }

    fn bump_past(&mut self, id: RecordId) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut Record> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the stored row with the same id. Returns false when no such row exists.
    pub fn update(&mut self, record: Record) -> bool {
        match self.get_mut(record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove a row by id, returning it.
    pub fn delete(&mut self, id: RecordId) -> Option<Record> {
        let idx = self.rows.iter().position(|r| r.id == id)?;
        Some(self.rows.remove(idx))
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
