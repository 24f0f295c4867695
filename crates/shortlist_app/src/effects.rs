//! Bridges core effects to the API worker and completions back to messages.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::{client_debug, client_info, client_warn};
use shortlist_client::{
    ApiCommand, ApiError, ApiEvent, ApiFailure, ApiHandle, BulkMode, CollectionSummary, Company,
};
use shortlist_core::{BulkAction, CollectionRef, CompanyId, CompanyRow, Effect, Msg};

pub struct EffectRunner {
    api: ApiHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, api: ApiHandle) -> Self {
        let runner = Self { api };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCollections => {
                    client_info!("LoadCollections");
                    self.api.submit(ApiCommand::ListCollections);
                }
                Effect::LoadPage {
                    collection_id,
                    offset,
                    limit,
                } => {
                    client_info!(
                        "LoadPage collection={} offset={} limit={}",
                        collection_id,
                        offset,
                        limit
                    );
                    self.api.submit(ApiCommand::FetchPage {
                        collection_id,
                        offset,
                        limit,
                    });
                }
                Effect::PushLike {
                    collection_id,
                    company_id,
                    liked,
                } => {
                    client_info!("PushLike company={} liked={}", company_id, liked);
                    let command = if liked {
                        ApiCommand::AddCompany {
                            collection_id,
                            company_id,
                        }
                    } else {
                        ApiCommand::RemoveCompany {
                            collection_id,
                            company_id,
                        }
                    };
                    self.api.submit(command);
                }
                Effect::PushBulk {
                    collection_id,
                    company_ids,
                    action,
                } => {
                    client_info!("PushBulk action={:?} count={}", action, company_ids.len());
                    self.api.submit(ApiCommand::BulkApply {
                        collection_id,
                        company_ids,
                        mode: map_action(action),
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let api = self.api.clone();
        thread::spawn(move || loop {
            if let Some(event) = api.try_recv() {
                if let Some(msg) = map_event(event) {
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_action(action: BulkAction) -> BulkMode {
    match action {
        BulkAction::Add => BulkMode::Add,
        BulkAction::Remove => BulkMode::Remove,
    }
}

fn map_collection(summary: CollectionSummary) -> CollectionRef {
    CollectionRef {
        id: summary.id,
        name: summary.collection_name,
    }
}

fn map_company(company: Company) -> CompanyRow {
    CompanyRow {
        id: company.id,
        name: company.company_name,
        liked: company.liked,
    }
}

fn map_event(event: ApiEvent) -> Option<Msg> {
    match event {
        ApiEvent::CollectionsListed { result } => match result {
            Ok(collections) => Some(Msg::CollectionsLoaded(
                collections.into_iter().map(map_collection).collect(),
            )),
            Err(err) => {
                client_warn!("Collection metadata lookup failed: {}", err);
                None
            }
        },
        ApiEvent::PageFetched {
            collection_id,
            offset,
            result,
        } => match result {
            Ok(page) => Some(Msg::PageLoaded {
                rows: page.companies.into_iter().map(map_company).collect(),
                total: page.total,
            }),
            Err(err) => {
                client_warn!(
                    "Page fetch failed for {} at offset {}: {}",
                    collection_id,
                    offset,
                    err
                );
                None
            }
        },
        ApiEvent::CompanyAdded { company_id, result } => {
            settle_push(company_id, true, result.map(|_| ()))
        }
        ApiEvent::CompanyRemoved { company_id, result } => {
            settle_push(company_id, false, result.map(|_| ()))
        }
        ApiEvent::BulkApplied { mode, result } => {
            match result {
                Ok(outcome) => {
                    client_debug!("Bulk {:?} touched {} companies", mode, outcome.total);
                }
                Err(err) => client_warn!("Bulk {:?} failed: {}", mode, err),
            }
            Some(Msg::BulkSettled)
        }
    }
}

fn settle_push(company_id: CompanyId, liked: bool, result: Result<(), ApiError>) -> Option<Msg> {
    match result {
        Ok(()) => {
            client_debug!("Like push confirmed for company {}", company_id);
            None
        }
        // The backend answers 409 when the company is already a member; the
        // optimistic flag matches membership, so there is nothing to undo.
        Err(err) if liked && err.kind == ApiFailure::HttpStatus(409) => {
            client_info!("Company {} already in liked collection", company_id);
            None
        }
        Err(err) => {
            client_warn!("Like push failed for company {}: {}", company_id, err);
            Some(Msg::LikePushFailed { company_id, liked })
        }
    }
}
