//! Shortlist core: pure table state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{BulkAction, Effect};
pub use msg::Msg;
pub use state::{
    CollectionId, CollectionRef, CompanyId, CompanyRow, TableState, DEFAULT_PAGE_SIZE,
    LIKED_COLLECTION_NAME, LIKE_FAILED_ALERT,
};
pub use update::update;
pub use view_model::{CompanyRowView, TableViewModel};
