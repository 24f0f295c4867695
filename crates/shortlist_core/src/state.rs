use std::collections::BTreeSet;

use crate::view_model::{CompanyRowView, TableViewModel};

/// Company primary key as issued by the backend.
pub type CompanyId = i64;

/// Opaque collection identifier (a UUID string on the wire).
pub type CollectionId = String;

/// Display name of the distinguished collection that holds liked companies.
pub const LIKED_COLLECTION_NAME: &str = "Liked Companies List";

/// Alert raised when the backend rejects a single like toggle.
pub const LIKE_FAILED_ALERT: &str = "Failed to update like status. Please try again.";

/// Page size used when the host does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// One loaded table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRow {
    pub id: CompanyId,
    pub name: String,
    pub liked: bool,
}

/// Collection metadata known to the table (id plus display name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRef {
    pub id: CollectionId,
    pub name: String,
}

/// Table state: the single owner of all mutable view state.
///
/// Fields are private; transitions go through [`crate::update`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    collections: Vec<CollectionRef>,
    selected_collection: Option<CollectionId>,
    offset: usize,
    page_size: usize,
    rows: Vec<CompanyRow>,
    total: u64,
    selected_ids: BTreeSet<CompanyId>,
    liked_collection: Option<CollectionId>,
    bulk_in_flight: bool,
    alert: Option<String>,
    dirty: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            collections: Vec::new(),
            selected_collection: None,
            offset: 0,
            page_size: page_size.max(1),
            rows: Vec::new(),
            total: 0,
            selected_ids: BTreeSet::new(),
            liked_collection: None,
            bulk_in_flight: false,
            alert: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> TableViewModel {
        let page_count = self.total.div_ceil(self.page_size as u64) as usize;
        TableViewModel {
            collections: self.collections.clone(),
            selected_collection: self.selected_collection.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| CompanyRowView {
                    id: row.id,
                    name: row.name.clone(),
                    liked: row.liked,
                    selected: self.selected_ids.contains(&row.id),
                })
                .collect(),
            row_count: self.total,
            page: self.offset / self.page_size,
            page_count,
            page_size: self.page_size,
            selection_count: self.selected_ids.len(),
            liked_ready: self.liked_collection.is_some(),
            bulk_in_flight: self.bulk_in_flight,
            bulk_enabled: self.liked_collection.is_some()
                && !self.bulk_in_flight
                && !self.selected_ids.is_empty(),
            alert: self.alert.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Stores collection metadata and resolves the liked collection by name.
    pub(crate) fn set_collections(&mut self, collections: Vec<CollectionRef>) {
        self.liked_collection = collections
            .iter()
            .find(|collection| collection.name == LIKED_COLLECTION_NAME)
            .map(|collection| collection.id.clone());
        self.collections = collections;
    }

    pub(crate) fn collections(&self) -> &[CollectionRef] {
        &self.collections
    }

    pub(crate) fn selected_collection(&self) -> Option<&CollectionId> {
        self.selected_collection.as_ref()
    }

    pub(crate) fn liked_collection(&self) -> Option<&CollectionId> {
        self.liked_collection.as_ref()
    }

    /// Selects a collection, resetting the window to the first page.
    pub(crate) fn select_collection(&mut self, id: CollectionId) {
        self.offset = 0;
        self.selected_collection = Some(id);
    }

    pub(crate) fn set_page(&mut self, page: usize, page_size: usize) {
        self.page_size = page_size.max(1);
        self.offset = page * self.page_size;
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn page_size(&self) -> usize {
        self.page_size
    }

    pub(crate) fn replace_rows(&mut self, rows: Vec<CompanyRow>, total: u64) {
        self.rows = rows;
        self.total = total;
    }

    pub(crate) fn row_liked(&self, id: CompanyId) -> Option<bool> {
        self.rows.iter().find(|row| row.id == id).map(|row| row.liked)
    }

    /// Sets a loaded row's liked flag; returns false when the row is not loaded.
    pub(crate) fn set_row_liked(&mut self, id: CompanyId, liked: bool) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.liked = liked;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_selection(&mut self, ids: Vec<CompanyId>) {
        self.selected_ids = ids.into_iter().collect();
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    /// Selected company ids in ascending order.
    pub(crate) fn selection_ids(&self) -> Vec<CompanyId> {
        self.selected_ids.iter().copied().collect()
    }

    pub(crate) fn selection_is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub(crate) fn bulk_in_flight(&self) -> bool {
        self.bulk_in_flight
    }

    pub(crate) fn set_bulk_in_flight(&mut self, in_flight: bool) {
        self.bulk_in_flight = in_flight;
    }

    pub(crate) fn raise_alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    pub(crate) fn clear_alert(&mut self) {
        self.alert = None;
    }
}
