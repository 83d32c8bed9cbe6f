use crate::models::reference;

use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
struct Holder {
    #[serde(deserialize_with = "reference::id")]
    one: String,
    #[serde(default, deserialize_with = "reference::ids")]
    many: Vec<String>,
    #[serde(default, deserialize_with = "reference::optional_id")]
    maybe: Option<String>,
}

#[test]
fn test_reference_accepts_id_and_id_alias() {
    let holder: Holder = serde_json::from_value(json!({
        "one": { "id": "a" },
        "many": ["b", { "_id": "c" }],
        "maybe": null
    }))
    .unwrap();

    assert_eq!(holder.one, "a");
    assert_eq!(holder.many, vec!["b", "c"]);
    assert!(holder.maybe.is_none());
}

#[test]
fn test_reference_null_list_is_empty() {
    let holder: Holder = serde_json::from_value(json!({ "one": "a", "many": null })).unwrap();
    assert!(holder.many.is_empty());
}

#[test]
fn test_reference_rejects_numbers() {
    let result = serde_json::from_value::<Holder>(json!({ "one": 7 }));
    assert!(result.is_err());
}
