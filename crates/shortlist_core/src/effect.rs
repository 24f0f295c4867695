use crate::{CollectionId, CompanyId};

/// IO requested by the reducer; executed outside the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCollections,
    LoadPage {
        collection_id: CollectionId,
        offset: usize,
        limit: usize,
    },
    PushLike {
        collection_id: CollectionId,
        company_id: CompanyId,
        liked: bool,
    },
    PushBulk {
        collection_id: CollectionId,
        company_ids: Vec<CompanyId>,
        action: BulkAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    Add,
    Remove,
}
