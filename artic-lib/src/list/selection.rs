//! Ordered, id-keyed row selection.

use std::collections::HashSet;

use crate::model::Artwork;
use crate::model::ArtworkId;

/// The rows the user has marked, possibly spanning several pages.
///
/// Order is preserved (it is the order rows were selected or accumulated
/// in) and membership is answered by id. Duplicate records are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    records: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection holding exactly `records`, in order.
    pub fn from_records(records: Vec<Artwork>) -> Self {
        let ids = records.iter().map(|r| r.id).collect();
        Self { records, ids }
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// The selected records in selection order.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The list a checkbox toggle on `artwork` would produce.
    ///
    /// Selected records are removed (every copy sharing the id); unselected
    /// ones are appended.
    pub fn toggled(&self, artwork: &Artwork) -> Vec<Artwork> {
        if self.is_selected(artwork.id) {
            self.records
                .iter()
                .filter(|r| r.id != artwork.id)
                .cloned()
                .collect()
        } else {
            let mut records = self.records.clone();
            records.push(artwork.clone());
            records
        }
    }
}
