use serde_json::{json, Value};

mod characters;
mod config;

#[test]
fn test_json_round_trip() {
    let value = json!({
        "Response": {
            "characters": {
                "data": {}
            }
        },
        "ErrorCode": 1,
        "Message": "Ok"
    });

    let reparsed: Value = serde_json::from_str(&serde_json::to_string(&value).unwrap()).unwrap();

    assert_eq!(value, reparsed);
}
