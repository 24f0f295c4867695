use std::sync::Once;

use shortlist_core::{
    update, CollectionRef, CompanyRow, Effect, Msg, TableState, LIKED_COLLECTION_NAME,
    LIKE_FAILED_ALERT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn company(id: i64, name: &str, liked: bool) -> CompanyRow {
    CompanyRow {
        id,
        name: name.to_string(),
        liked,
    }
}

/// Collections resolved and one page loaded: id 5 unliked, id 7 liked.
fn seeded() -> TableState {
    let collections = vec![
        CollectionRef {
            id: "col-main".to_string(),
            name: "My List".to_string(),
        },
        CollectionRef {
            id: "col-liked".to_string(),
            name: LIKED_COLLECTION_NAME.to_string(),
        },
    ];
    let (state, _) = update(TableState::new(), Msg::CollectionsLoaded(collections));
    let (mut state, _) = update(
        state,
        Msg::PageLoaded {
            rows: vec![company(5, "Acme", false), company(7, "Globex", true)],
            total: 2,
        },
    );
    state.consume_dirty();
    state
}

fn row_liked(state: &TableState, id: i64) -> bool {
    state
        .view()
        .rows
        .iter()
        .find(|row| row.id == id)
        .expect("row loaded")
        .liked
}

#[test]
fn toggle_flips_local_flag_before_confirmation() {
    init_logging();
    let (mut state, effects) = update(seeded(), Msg::ToggleLike { company_id: 5 });

    assert!(row_liked(&state, 5));
    assert_eq!(
        effects,
        vec![Effect::PushLike {
            collection_id: "col-liked".to_string(),
            company_id: 5,
            liked: true,
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn toggle_on_liked_row_pushes_removal() {
    init_logging();
    let (state, effects) = update(seeded(), Msg::ToggleLike { company_id: 7 });

    assert!(!row_liked(&state, 7));
    assert_eq!(
        effects,
        vec![Effect::PushLike {
            collection_id: "col-liked".to_string(),
            company_id: 7,
            liked: false,
        }]
    );
}

#[test]
fn failed_push_reverts_and_raises_alert() {
    init_logging();
    let (state, _) = update(seeded(), Msg::ToggleLike { company_id: 5 });
    let (state, effects) = update(
        state,
        Msg::LikePushFailed {
            company_id: 5,
            liked: true,
        },
    );

    assert!(effects.is_empty());
    assert!(!row_liked(&state, 5));
    assert_eq!(state.view().alert.as_deref(), Some(LIKE_FAILED_ALERT));
}

#[test]
fn alert_clears_after_dismissal() {
    init_logging();
    let (state, _) = update(seeded(), Msg::ToggleLike { company_id: 5 });
    let (state, _) = update(
        state,
        Msg::LikePushFailed {
            company_id: 5,
            liked: true,
        },
    );
    let (state, effects) = update(state, Msg::AlertDismissed);

    assert!(effects.is_empty());
    assert!(state.view().alert.is_none());
}

#[test]
fn toggle_without_resolved_liked_collection_is_noop() {
    init_logging();
    let (mut state, _) = update(
        TableState::new(),
        Msg::PageLoaded {
            rows: vec![company(5, "Acme", false)],
            total: 1,
        },
    );
    state.consume_dirty();

    let (next, effects) = update(state.clone(), Msg::ToggleLike { company_id: 5 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn toggle_on_unknown_company_is_noop() {
    init_logging();
    let state = seeded();
    let (next, effects) = update(state.clone(), Msg::ToggleLike { company_id: 99 });

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn revert_after_rows_replaced_only_alerts() {
    init_logging();
    let (state, _) = update(seeded(), Msg::ToggleLike { company_id: 5 });
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            rows: vec![company(8, "Umbrella", false)],
            total: 1,
        },
    );
    let (state, _) = update(
        state,
        Msg::LikePushFailed {
            company_id: 5,
            liked: true,
        },
    );
    let view = state.view();

    assert_eq!(view.alert.as_deref(), Some(LIKE_FAILED_ALERT));
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].id, 8);
}
