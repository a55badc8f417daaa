use serde_json::json;

use crate::characters::{CharacterArray, DestinyClass};
use crate::error::Error;
use crate::{destiny, destiny2};

fn profile(characters: serde_json::Value) -> serde_json::Value {
    json!({
        "Response": {
            "characters": {
                "data": characters
            }
        }
    })
}

fn summary(characters: serde_json::Value) -> serde_json::Value {
    json!({
        "Response": {
            "data": {
                "characters": characters
            }
        }
    })
}

#[test]
fn test_profile_characters_full_trio() {
    let characters = destiny2::build_characters(profile(json!({
        "2305843009301000001": { "characterId": "2305843009301000001", "classType": 1 },
        "2305843009301000002": { "characterId": "2305843009301000002", "classType": 0 },
        "2305843009301000003": { "characterId": "2305843009301000003", "classType": 2 }
    }))).unwrap();

    assert_eq!(characters.get(DestinyClass::Titan), Some("2305843009301000002"));
    assert_eq!(characters.get(DestinyClass::Hunter), Some("2305843009301000001"));
    assert_eq!(characters.get(DestinyClass::Warlock), Some("2305843009301000003"));
}

#[test]
fn test_profile_characters_lone_hunter() {
    let characters = destiny2::build_characters(profile(json!({
        "2305843009301000001": { "characterId": "2305843009301000001", "classType": 1 }
    }))).unwrap();

    assert_eq!(characters.get(DestinyClass::Titan), None);
    assert_eq!(characters.get(DestinyClass::Hunter), Some("2305843009301000001"));
    assert_eq!(characters.get(DestinyClass::Warlock), None);

    assert_eq!(
        characters.iter().collect::<Vec<_>>(),
        vec![None, Some("2305843009301000001"), None]
    );
}

#[test]
fn test_profile_characters_duplicate_class_is_deterministic() {
    // Two warlocks: entries are visited in character id order,
    // so the one with the greater id wins
    let characters = destiny2::build_characters(profile(json!({
        "100": { "characterId": "100", "classType": 2 },
        "200": { "characterId": "200", "classType": 2 }
    }))).unwrap();

    assert_eq!(characters.get(DestinyClass::Warlock), Some("200"));
}

#[test]
fn test_profile_characters_unknown_class_rejected() {
    let result = destiny2::build_characters(profile(json!({
        "100": { "characterId": "100", "classType": 3 }
    })));

    assert!(matches!(result, Err(Error::UnknownClassType(3))));
}

#[test]
fn test_summary_characters_full_trio() {
    let characters = destiny::build_characters(summary(json!([
        { "characterBase": { "characterId": "101", "classType": 2 } },
        { "characterBase": { "characterId": "102", "classType": 0 } },
        { "characterBase": { "characterId": "103", "classType": 1 } }
    ]))).unwrap();

    assert_eq!(
        characters.into_inner(),
        [
            Some(String::from("102")),
            Some(String::from("103")),
            Some(String::from("101"))
        ]
    );
}

#[test]
fn test_summary_characters_duplicate_class_last_wins() {
    let characters = destiny::build_characters(summary(json!([
        { "characterBase": { "characterId": "101", "classType": 0 } },
        { "characterBase": { "characterId": "102", "classType": 0 } }
    ]))).unwrap();

    assert_eq!(characters.get(DestinyClass::Titan), Some("102"));
}

#[test]
fn test_summary_characters_out_of_range_class_rejected() {
    let result = destiny::build_characters(summary(json!([
        { "characterBase": { "characterId": "101", "classType": 7 } }
    ])));

    assert!(matches!(result, Err(Error::UnknownClassType(7))));
}

#[test]
fn test_malformed_summary_is_a_parse_error() {
    let result = destiny::build_characters(json!({
        "Response": {}
    }));

    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_character_array_insert_bounds() {
    let mut characters = CharacterArray::default();

    characters.insert(0, "titan").unwrap();
    characters.insert(1, "hunter").unwrap();
    characters.insert(2, "warlock").unwrap();

    assert!(matches!(characters.insert(3, "ghost"), Err(Error::UnknownClassType(3))));
    assert!(matches!(characters.insert(255, "ghost"), Err(Error::UnknownClassType(255))));

    // the failed inserts must not have touched any slot
    assert_eq!(
        characters.iter().collect::<Vec<_>>(),
        vec![Some("titan"), Some("hunter"), Some("warlock")]
    );
}

#[test]
fn test_class_type_conversions() {
    assert_eq!(DestinyClass::try_from(0).unwrap(), DestinyClass::Titan);
    assert_eq!(DestinyClass::try_from(1).unwrap(), DestinyClass::Hunter);
    assert_eq!(DestinyClass::try_from(2).unwrap(), DestinyClass::Warlock);
    assert_eq!(DestinyClass::try_from(3).unwrap(), DestinyClass::Unknown);

    assert!(matches!(DestinyClass::try_from(4), Err(Error::UnknownClassType(4))));

    assert_eq!(DestinyClass::list().len(), 4);
}
