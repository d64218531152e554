use super::{
    DateString,
    UnknownFields,
};

/// The current aes keys
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aes {
    /// The game build the keys belong to
    pub build: String,

    /// The main key, if there is one
    pub main_key: Option<String>,

    /// Keys for dynamically loaded paks
    pub dynamic_keys: Vec<DynamicKey>,

    pub updated: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A key for a dynamically loaded pak
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicKey {
    pub pak_filename: String,
    pub pak_guid: String,
    pub key: String,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}
