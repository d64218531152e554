use super::UnknownFields;

/// A support-a-creator code
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCode {
    pub code: String,
    pub account: CreatorAccount,

    /// Usually `ACTIVE`
    pub status: String,
    pub verified: bool,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// The account that owns a creator code
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CreatorAccount {
    pub id: String,
    pub name: String,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}
