use shortlist_core::{update, Msg, TableState};

#[test]
fn update_is_noop() {
    let state = TableState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
