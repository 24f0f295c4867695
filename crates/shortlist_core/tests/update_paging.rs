use std::sync::Once;

use shortlist_core::{
    update, CollectionRef, CompanyRow, Effect, Msg, TableState, LIKED_COLLECTION_NAME,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn collections() -> Vec<CollectionRef> {
    vec![
        CollectionRef {
            id: "col-main".to_string(),
            name: "My List".to_string(),
        },
        CollectionRef {
            id: "col-liked".to_string(),
            name: LIKED_COLLECTION_NAME.to_string(),
        },
    ]
}

fn company(id: i64, name: &str, liked: bool) -> CompanyRow {
    CompanyRow {
        id,
        name: name.to_string(),
        liked,
    }
}

#[test]
fn started_requests_collection_metadata() {
    init_logging();
    let (_state, effects) = update(TableState::new(), Msg::Started);

    assert_eq!(effects, vec![Effect::LoadCollections]);
}

#[test]
fn collections_loaded_selects_first_and_fetches_first_page() {
    init_logging();
    let (mut state, effects) = update(TableState::new(), Msg::CollectionsLoaded(collections()));
    let view = state.view();

    assert_eq!(view.selected_collection.as_deref(), Some("col-main"));
    assert!(view.liked_ready);
    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            collection_id: "col-main".to_string(),
            offset: 0,
            limit: 25,
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn collections_without_liked_entry_leave_liked_unresolved() {
    init_logging();
    let only_main = vec![CollectionRef {
        id: "col-main".to_string(),
        name: "My List".to_string(),
    }];
    let (state, _effects) = update(TableState::new(), Msg::CollectionsLoaded(only_main));

    assert!(!state.view().liked_ready);
}

#[test]
fn page_change_recomputes_offset() {
    init_logging();
    let (state, _) = update(TableState::new(), Msg::CollectionsLoaded(collections()));
    let (state, effects) = update(
        state,
        Msg::PageChanged {
            page: 2,
            page_size: 25,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            collection_id: "col-main".to_string(),
            offset: 50,
            limit: 25,
        }]
    );
    assert_eq!(state.view().page, 2);
}

#[test]
fn switching_collection_resets_offset_before_fetch() {
    init_logging();
    let (state, _) = update(TableState::new(), Msg::CollectionsLoaded(collections()));
    let (state, _) = update(
        state,
        Msg::PageChanged {
            page: 2,
            page_size: 25,
        },
    );

    let (state, effects) = update(state, Msg::CollectionSelected("col-liked".to_string()));

    assert_eq!(
        effects,
        vec![Effect::LoadPage {
            collection_id: "col-liked".to_string(),
            offset: 0,
            limit: 25,
        }]
    );
    assert_eq!(state.view().page, 0);
}

#[test]
fn reselecting_current_collection_is_a_noop() {
    init_logging();
    let (mut state, _) = update(TableState::new(), Msg::CollectionsLoaded(collections()));
    state.consume_dirty();

    let (mut next, effects) = update(state, Msg::CollectionSelected("col-main".to_string()));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn last_partial_page_shows_remaining_rows() {
    init_logging();
    let (state, _) = update(TableState::new(), Msg::CollectionsLoaded(collections()));
    let (state, _) = update(
        state,
        Msg::PageChanged {
            page: 2,
            page_size: 25,
        },
    );

    let rows = (51..=57)
        .map(|id| company(id, &format!("Company {id}"), false))
        .collect::<Vec<_>>();
    let (state, effects) = update(state, Msg::PageLoaded { rows, total: 57 });
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.row_count, 57);
    assert_eq!(view.page, 2);
    assert_eq!(view.page_count, 3);
}

#[test]
fn page_load_replaces_rows_unconditionally() {
    init_logging();
    let (state, _) = update(TableState::new(), Msg::CollectionsLoaded(collections()));
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            rows: vec![company(1, "Acme", false)],
            total: 1,
        },
    );

    // A later-completing fetch wins, even if it carries older data.
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            rows: vec![company(2, "Globex", true), company(3, "Initech", false)],
            total: 2,
        },
    );
    let view = state.view();

    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.row_count, 2);
    assert_eq!(view.rows[0].id, 2);
}
