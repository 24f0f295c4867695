use serde::{Deserialize, Serialize};

/// Company primary key as issued by the backend.
pub type CompanyId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub company_name: String,
    pub liked: bool,
}

/// Collection metadata row from `GET /collections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub id: String,
    pub collection_name: String,
}

/// One paginated window of a collection plus its full membership count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub id: String,
    pub collection_name: String,
    pub companies: Vec<Company>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyBatch {
    pub companies: Vec<Company>,
}

/// Companies touched by a bulk call, with the count the backend reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    pub companies: Vec<Company>,
    pub total: u64,
}

/// Acknowledgement body for a single removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveAck {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct AddCompanyBody {
    pub company_id: CompanyId,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct BulkCompanyBody {
    pub company_ids: Vec<CompanyId>,
}
