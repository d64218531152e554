use super::{
    DateString,
    UnknownFields,
};

/// The news for every game mode
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AllNews {
    /// Battle Royale news
    pub br: Option<News>,
    /// Save the World news
    pub stw: Option<News>,
    pub creative: Option<News>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// The news for one game mode
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub hash: String,
    pub date: DateString,
    pub image: Option<String>,
    pub motds: Option<Vec<Motd>>,
    pub messages: Option<Vec<NewsMessage>>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A message of the day
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Motd {
    pub id: String,
    pub title: String,
    pub tab_title: Option<String>,
    pub body: String,
    pub image: String,
    pub title_image: Option<String>,
    pub sorting_priority: i32,
    pub hidden: bool,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A news message
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMessage {
    pub title: String,
    pub body: String,
    pub image: String,
    pub adspace: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}
