use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

// Only the fields the character array builder reads are declared here.
// Unknown fields of the component are ignored, not validated

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "Response")]
    pub response: ProfileResponse
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub characters: CharactersComponent
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharactersComponent {
    /// Characters keyed by character id
    ///
    /// A `BTreeMap` keeps iteration in character id order, so profiles
    /// carrying two characters of one class rebuild deterministically
    pub data: BTreeMap<String, Character>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub character_id: String,
    pub class_type: u8
}
