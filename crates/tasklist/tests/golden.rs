//! Golden wire shapes.
//!
//! Clients depend on these exact JSON encodings. Any change here is a
//! breaking change to the API.

use serde_json::json;

use tasklist::http::messages::{CreateItemRequest, ErrorBody, ListResponse, UpdateItemRequest};
use tasklist::{Item, ItemId, ItemPatch};

#[test]
fn golden_item() {
    let item = Item::new(ItemId(1), "Buy milk");
    assert_eq!(
        serde_json::to_string(&item).unwrap(),
        r#"{"id":1,"text":"Buy milk","completed":false}"#
    );

    let done = Item::new(ItemId(42), "Ship it").with_completed(true);
    assert_eq!(
        serde_json::to_value(&done).unwrap(),
        json!({"id": 42, "text": "Ship it", "completed": true})
    );
}

#[test]
fn golden_list_response() {
    let response = ListResponse {
        items: vec![
            Item::new(ItemId(2), "Build a todo app"),
            Item::new(ItemId(3), "Master Node.js"),
        ],
        filter: "active".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        concat!(
            r#"{"items":[{"id":2,"text":"Build a todo app","completed":false},"#,
            r#"{"id":3,"text":"Master Node.js","completed":false}],"filter":"active"}"#
        )
    );
}

#[test]
fn golden_empty_list_response() {
    let response = ListResponse {
        items: vec![],
        filter: "completed".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"items":[],"filter":"completed"}"#
    );
}

#[test]
fn golden_error_bodies() {
    for (message, expected) in [
        ("Text is required", r#"{"error":"Text is required"}"#),
        ("Todo not found", r#"{"error":"Todo not found"}"#),
        ("Internal server error", r#"{"error":"Internal server error"}"#),
    ] {
        assert_eq!(serde_json::to_string(&ErrorBody::new(message)).unwrap(), expected);
    }
}

#[test]
fn golden_requests_decode() {
    let create: CreateItemRequest = serde_json::from_str(r#"{"text":"Buy milk"}"#).unwrap();
    assert_eq!(create, CreateItemRequest::new("Buy milk"));

    let update: UpdateItemRequest = serde_json::from_str(r#"{"completed":true}"#).unwrap();
    assert_eq!(ItemPatch::from(update), ItemPatch::new().completed(true));

    let update: UpdateItemRequest =
        serde_json::from_str(r#"{"text":"Renamed","completed":null}"#).unwrap();
    assert_eq!(ItemPatch::from(update), ItemPatch::new().text("Renamed"));
}

#[test]
fn golden_patch_omits_absent_fields() {
    assert_eq!(serde_json::to_string(&ItemPatch::new()).unwrap(), "{}");
    assert_eq!(
        serde_json::to_string(&ItemPatch::new().completed(false)).unwrap(),
        r#"{"completed":false}"#
    );
}
