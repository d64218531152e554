use super::UnknownFields;

/// A banner
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub dev_name: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub full_usage_rights: bool,
    pub images: BannerImages,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// Banner image urls
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerImages {
    pub small_icon: String,
    pub icon: String,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A banner color
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerColor {
    pub id: String,

    /// The color as hex, like `ff2400ff`
    pub color: String,
    pub category: String,
    pub sub_category_group: u32,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}
