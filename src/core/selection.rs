//! Selection tracker: ids ticked in the grid, kept in insertion order.

use crate::models::RecordId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `visible` (checked) or clear it (unchecked).
    pub fn select_all<I>(&mut self, checked: bool, visible: I)
    where
        I: IntoIterator<Item = RecordId>,
    {
        self.ids.clear();
        if checked {
            for id in visible {
                if !self.ids.contains(&id) {
                    self.ids.push(id);
                }
            }
        }
    }

    /// Flip membership of one id. Returns true when the id is now selected.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Drop an id if present; absent ids are ignored.
    pub fn remove(&mut self, id: RecordId) -> bool {
        match self.ids.iter().position(|x| *x == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    /// "All selected" checkbox state for a projection of `visible_len` rows.
    pub fn all_selected(&self, visible_len: usize) -> bool {
        visible_len > 0 && self.ids.len() == visible_len
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
