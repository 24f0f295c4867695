use crate::{BulkAction, Effect, Msg, TableState, LIKE_FAILED_ALERT};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: TableState, msg: Msg) -> (TableState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::LoadCollections],
        Msg::CollectionsLoaded(collections) => {
            state.set_collections(collections);
            state.mark_dirty();
            if state.selected_collection().is_some() {
                Vec::new()
            } else {
                // Nothing selected yet: default to the first collection.
                match state.collections().first().map(|c| c.id.clone()) {
                    Some(id) => {
                        state.select_collection(id);
                        load_current_page(&state)
                    }
                    None => Vec::new(),
                }
            }
        }
        Msg::CollectionSelected(id) => {
            if state.selected_collection() == Some(&id) {
                return (state, Vec::new());
            }
            // Offset resets before the fetch for the new collection is issued.
            state.select_collection(id);
            state.mark_dirty();
            load_current_page(&state)
        }
        Msg::PageChanged { page, page_size } => {
            state.set_page(page, page_size);
            state.mark_dirty();
            load_current_page(&state)
        }
        Msg::PageLoaded { rows, total } => {
            // Last-write-wins: a stale fetch overwrites newer local state.
            state.replace_rows(rows, total);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ToggleLike { company_id } => {
            let Some(liked_collection) = state.liked_collection().cloned() else {
                return (state, Vec::new());
            };
            let Some(was_liked) = state.row_liked(company_id) else {
                return (state, Vec::new());
            };
            // Optimistic patch: flip locally, reconcile with the push outcome.
            let liked = !was_liked;
            state.set_row_liked(company_id, liked);
            state.mark_dirty();
            vec![Effect::PushLike {
                collection_id: liked_collection,
                company_id,
                liked,
            }]
        }
        Msg::LikePushFailed { company_id, liked } => {
            // Inverse patch; the row may have been paged away in the meantime.
            state.set_row_liked(company_id, !liked);
            state.raise_alert(LIKE_FAILED_ALERT);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SelectionChanged(ids) => {
            state.set_selection(ids);
            state.mark_dirty();
            Vec::new()
        }
        Msg::BulkLikeClicked => start_bulk(&mut state, BulkAction::Add),
        Msg::BulkUnlikeClicked => start_bulk(&mut state, BulkAction::Remove),
        Msg::BulkSettled => {
            state.set_bulk_in_flight(false);
            state.clear_selection();
            state.mark_dirty();
            load_current_page(&state)
        }
        Msg::AlertDismissed => {
            // The alert was already rendered once; no redraw needed.
            state.clear_alert();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_bulk(state: &mut TableState, action: BulkAction) -> Vec<Effect> {
    let Some(liked_collection) = state.liked_collection().cloned() else {
        return Vec::new();
    };
    if state.bulk_in_flight() || state.selection_is_empty() {
        return Vec::new();
    }
    state.set_bulk_in_flight(true);
    state.mark_dirty();
    vec![Effect::PushBulk {
        collection_id: liked_collection,
        company_ids: state.selection_ids(),
        action,
    }]
}

fn load_current_page(state: &TableState) -> Vec<Effect> {
    state
        .selected_collection()
        .cloned()
        .map(|collection_id| Effect::LoadPage {
            collection_id,
            offset: state.offset(),
            limit: state.page_size(),
        })
        .into_iter()
        .collect()
}
