//! Hymn Catalog
//!
//! The loaded corpus in its original order, plus a lookup from hymn number to position.
//! Navigation to a detail page is driven by position in the corpus, never by the order of
//! a search result list, so every consumer resolves numbers through [`HymnCatalog::position_of`].

use super::types::Hymn;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum number of digits accepted by the number pad.
pub const MAX_NUMBER_DIGITS: usize = 3;

/// Immutable view of the corpus shared between the pipeline and its consumers.
#[derive(Debug, Default)]
pub struct HymnCatalog {
    hymns: Vec<Arc<Hymn>>,
    positions: HashMap<u32, usize>,
}

impl HymnCatalog {
    pub fn new(hymns: Vec<Hymn>) -> Self {
        let hymns: Vec<Arc<Hymn>> = hymns.into_iter().map(Arc::new).collect();
        let mut positions = HashMap::with_capacity(hymns.len());

        for (position, hymn) in hymns.iter().enumerate() {
            // First occurrence owns the number.
            match positions.entry(hymn.number) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        "Duplicate hymn number {} at position {}",
                        hymn.number,
                        position
                    );
                }
            }
        }

        Self { hymns, positions }
    }

    /// Hymns in corpus order.
    pub fn hymns(&self) -> &[Arc<Hymn>] {
        &self.hymns
    }

    pub fn len(&self) -> usize {
        self.hymns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hymns.is_empty()
    }

    /// Position of the hymn with the given number in the original corpus order.
    pub fn position_of(&self, number: u32) -> Option<usize> {
        self.positions.get(&number).copied()
    }

    pub fn hymn_at(&self, position: usize) -> Option<&Arc<Hymn>> {
        self.hymns.get(position)
    }

    pub fn by_number(&self, number: u32) -> Option<&Arc<Hymn>> {
        self.position_of(number).and_then(|position| self.hymn_at(position))
    }
}

/// Parses a number-pad entry.
///
/// Accepts between one and [`MAX_NUMBER_DIGITS`] ASCII digits, nothing else.
pub fn parse_hymn_number(entry: &str) -> Option<u32> {
    let entry = entry.trim();
    if entry.is_empty()
        || entry.len() > MAX_NUMBER_DIGITS
        || !entry.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    entry.parse().ok()
}

/// The hymn currently opened in the detail view, by corpus position.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HymnSelection {
    selected: Option<usize>,
}

impl HymnSelection {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the hymn at `position`. Positions outside the catalog are ignored.
    ///
    /// # Returns
    /// `true` if the selection changed to `position`.
    pub fn select(&mut self, position: usize, catalog: &HymnCatalog) -> bool {
        if position < catalog.len() {
            self.selected = Some(position);
            true
        } else {
            tracing::debug!(
                "Ignoring selection of position {} (catalog has {} hymns)",
                position,
                catalog.len()
            );
            false
        }
    }

    /// Selects the hymn with the given number, as the number pad does.
    pub fn jump_to(&mut self, number: u32, catalog: &HymnCatalog) -> bool {
        match catalog.position_of(number) {
            Some(position) => self.select(position, catalog),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
