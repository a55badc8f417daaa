use serde::{Serialize, Deserialize};

// Legacy account summary layout: characters sit in an array under
// `Response.data`, with their fields one level down in `characterBase`

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "Response")]
    pub response: SummaryResponse
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub data: AccountData
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub characters: Vec<SummaryCharacter>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCharacter {
    pub character_base: CharacterBase
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBase {
    pub character_id: String,
    pub class_type: u8
}
