use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::api::{ApiSettings, CompanyApi, RestApi};
use crate::types::{BulkOutcome, CollectionPage, CollectionSummary, Company, CompanyId, RemoveAck};
use crate::ApiError;

/// Which bulk endpoint a `BulkApply` command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkMode {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    ListCollections,
    FetchPage {
        collection_id: String,
        offset: usize,
        limit: usize,
    },
    AddCompany {
        collection_id: String,
        company_id: CompanyId,
    },
    RemoveCompany {
        collection_id: String,
        company_id: CompanyId,
    },
    BulkApply {
        collection_id: String,
        company_ids: Vec<CompanyId>,
        mode: BulkMode,
    },
}

/// One completion per command, echoing enough of the request to correlate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    CollectionsListed {
        result: Result<Vec<CollectionSummary>, ApiError>,
    },
    PageFetched {
        collection_id: String,
        offset: usize,
        result: Result<CollectionPage, ApiError>,
    },
    CompanyAdded {
        company_id: CompanyId,
        result: Result<Company, ApiError>,
    },
    CompanyRemoved {
        company_id: CompanyId,
        result: Result<RemoveAck, ApiError>,
    },
    BulkApplied {
        mode: BulkMode,
        result: Result<BulkOutcome, ApiError>,
    },
}

/// Handle to the API worker thread.
///
/// Commands run concurrently on the worker's runtime; completions queue up
/// for [`ApiHandle::try_recv`] polling. Clones share one event queue.
#[derive(Clone)]
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ApiEvent>>>,
}

impl ApiHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(RestApi::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, command: ApiCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.lock().ok().and_then(|rx| rx.try_recv().ok())
    }
}

async fn run_command(api: &dyn CompanyApi, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::ListCollections => ApiEvent::CollectionsListed {
            result: api.list_collections().await,
        },
        ApiCommand::FetchPage {
            collection_id,
            offset,
            limit,
        } => {
            let result = api
                .fetch_collection(&collection_id, Some(offset), Some(limit))
                .await;
            ApiEvent::PageFetched {
                collection_id,
                offset,
                result,
            }
        }
        ApiCommand::AddCompany {
            collection_id,
            company_id,
        } => ApiEvent::CompanyAdded {
            company_id,
            result: api.add_company(&collection_id, company_id).await,
        },
        ApiCommand::RemoveCompany {
            collection_id,
            company_id,
        } => ApiEvent::CompanyRemoved {
            company_id,
            result: api.remove_company(&collection_id, company_id).await,
        },
        ApiCommand::BulkApply {
            collection_id,
            company_ids,
            mode,
        } => {
            let result = match mode {
                BulkMode::Add => api.bulk_add(&collection_id, &company_ids).await,
                BulkMode::Remove => api.bulk_remove(&collection_id, &company_ids).await,
            };
            ApiEvent::BulkApplied { mode, result }
        }
    }
}
