use crate::{CollectionId, CollectionRef, CompanyId, CompanyRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App started; kick off collection metadata resolution.
    Started,
    /// Collection metadata arrived from the backend.
    CollectionsLoaded(Vec<CollectionRef>),
    /// User picked a collection to browse.
    CollectionSelected(CollectionId),
    /// Grid pagination changed (zero-based page index and page size).
    PageChanged { page: usize, page_size: usize },
    /// A page of companies arrived for the selected collection.
    PageLoaded { rows: Vec<CompanyRow>, total: u64 },
    /// User toggled the like star on one row.
    ToggleLike { company_id: CompanyId },
    /// The backend rejected a like push; `liked` is the value that was pushed.
    LikePushFailed { company_id: CompanyId, liked: bool },
    /// Grid row selection changed.
    SelectionChanged(Vec<CompanyId>),
    /// User clicked the bulk "add to liked" button.
    BulkLikeClicked,
    /// User clicked the bulk "remove from liked" button.
    BulkUnlikeClicked,
    /// A bulk request finished, successfully or not.
    BulkSettled,
    /// The pending alert has been shown to the user.
    AlertDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
