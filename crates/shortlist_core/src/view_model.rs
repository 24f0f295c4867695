use crate::{CollectionId, CollectionRef, CompanyId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableViewModel {
    pub collections: Vec<CollectionRef>,
    pub selected_collection: Option<CollectionId>,
    pub rows: Vec<CompanyRowView>,
    /// Full membership count of the selected collection, not the window size.
    pub row_count: u64,
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub selection_count: usize,
    pub liked_ready: bool,
    pub bulk_in_flight: bool,
    pub bulk_enabled: bool,
    pub alert: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRowView {
    pub id: CompanyId,
    pub name: String,
    pub liked: bool,
    pub selected: bool,
}
