use super::*;
use board::RawBoard;
use serde_json::json;

fn empty_board() -> Board {
    Board::build(&RawBoard::default())
}

#[tokio::test]
async fn new_store_is_empty() {
    let state = ViewStore::new().snapshot().await;
    assert_eq!(state, ViewState::default());
    assert!(state.board.is_none());
    assert!(state.log.is_none());
    assert_eq!(state.revision, 0);
}

#[tokio::test]
async fn set_board_replaces_prompt_and_error() {
    let store = ViewStore::new();
    store.set_board(empty_board(), Some("Choose".to_owned()), Some("bad input".to_owned())).await;
    store.set_board(empty_board(), Some("Next".to_owned()), None).await;

    let state = store.snapshot().await;
    assert!(state.board.is_some());
    assert_eq!(state.prompt.as_deref(), Some("Next"));
    assert!(state.error.is_none());
    assert_eq!(state.revision, 2);
}

#[tokio::test]
async fn set_log_leaves_board_untouched() {
    let store = ViewStore::new();
    store.set_log(vec![json!("Drew card 3")]).await;

    let state = store.snapshot().await;
    assert!(state.board.is_none());
    assert_eq!(state.log, Some(vec![json!("Drew card 3")]));
    assert_eq!(store.revision().await, 1);
}

#[tokio::test]
async fn clones_share_state() {
    let store = ViewStore::new();
    let reader = store.clone();
    store.set_log(Vec::new()).await;
    assert_eq!(reader.revision().await, 1);
}

#[tokio::test]
async fn serializes_renderer_fields() {
    let store = ViewStore::new();
    store.set_log(vec![json!("a")]).await;
    let json = serde_json::to_value(store.snapshot().await).unwrap();
    assert!(json["board"].is_null());
    assert_eq!(json["log"], json!(["a"]));
    assert_eq!(json["revision"], 1);
}
