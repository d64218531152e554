use super::{
    DateString,
    UnknownFields,
};
use std::collections::HashMap;

/// A `{ value, displayValue, backendValue }` triple
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticValue {
    pub value: String,
    pub display_value: String,
    pub backend_value: String,
}

/// A battle royale cosmetic
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrCosmetic {
    pub id: String,
    pub name: String,
    pub description: String,
    pub custom_exclusive_callout: Option<String>,
    #[serde(rename = "type")]
    pub cosmetic_type: CosmeticValue,
    pub rarity: CosmeticValue,
    pub series: Option<CosmeticSeries>,
    pub set: Option<CosmeticValue>,
    pub introduction: Option<CosmeticIntroduction>,
    pub images: CosmeticImages,
    pub variants: Option<Vec<CosmeticVariant>>,
    pub built_in_emote_ids: Option<Vec<String>>,
    pub search_tags: Option<Vec<String>>,
    pub gameplay_tags: Option<Vec<String>>,
    pub meta_tags: Option<Vec<String>>,
    pub showcase_video: Option<String>,
    pub dynamic_pak_id: Option<String>,
    pub item_preview_hero_path: Option<String>,
    pub display_asset_path: Option<String>,
    pub definition_path: Option<String>,
    pub path: Option<String>,
    pub added: DateString,
    pub shop_history: Option<Vec<DateString>>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A rarity series
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSeries {
    pub value: String,
    pub image: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub backend_value: String,
}

/// When a cosmetic was introduced
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticIntroduction {
    pub chapter: String,
    pub season: String,
    pub text: String,
    pub backend_value: u32,
}

/// Cosmetic image urls
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticImages {
    pub small_icon: Option<String>,
    pub icon: Option<String>,
    pub featured: Option<String>,
    pub other: Option<HashMap<String, String>>,
}

/// A cosmetic style channel
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CosmeticVariant {
    pub channel: String,
    #[serde(rename = "type")]
    pub variant_type: Option<String>,
    pub options: Vec<CosmeticVariantOption>,
}

/// A single style
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CosmeticVariantOption {
    pub tag: String,
    pub name: Option<String>,
    pub image: String,
}

/// A jam track
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackCosmetic {
    pub id: String,
    pub dev_name: String,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub release_year: Option<u32>,
    pub bpm: Option<u32>,
    pub duration: Option<u32>,
    pub album_art: Option<String>,
    pub added: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A car cosmetic
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCosmetic {
    pub id: String,
    pub vehicle_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub cosmetic_type: Option<CosmeticValue>,
    pub rarity: Option<CosmeticValue>,
    pub added: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A festival instrument cosmetic
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentCosmetic {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub cosmetic_type: Option<CosmeticValue>,
    pub rarity: Option<CosmeticValue>,
    pub added: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A lego style for a battle royale cosmetic
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoCosmetic {
    pub id: String,
    pub cosmetic_id: String,
    pub sound_library_tags: Option<Vec<String>>,
    pub added: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A lego kit
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegoKit {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub cosmetic_type: Option<CosmeticValue>,
    pub added: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// Every cosmetic, grouped by kind
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllCosmetics {
    #[serde(default)]
    pub br: Vec<BrCosmetic>,
    #[serde(default)]
    pub tracks: Vec<TrackCosmetic>,
    #[serde(default)]
    pub instruments: Vec<InstrumentCosmetic>,
    #[serde(default)]
    pub cars: Vec<CarCosmetic>,
    #[serde(default)]
    pub lego: Vec<LegoCosmetic>,
    #[serde(default)]
    pub lego_kits: Vec<LegoKit>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// Recently added cosmetics of every kind
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmetics {
    pub date: DateString,
    pub build: String,
    pub previous_build: String,

    /// Per-kind content hashes
    #[serde(default)]
    pub hashes: HashMap<String, Option<String>>,

    /// Per-kind timestamps of the last addition
    #[serde(default)]
    pub last_additions: HashMap<String, Option<DateString>>,

    pub items: NewCosmeticItems,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// The items in [`NewCosmetics`]
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmeticItems {
    pub br: Option<Vec<BrCosmetic>>,
    pub tracks: Option<Vec<TrackCosmetic>>,
    pub instruments: Option<Vec<InstrumentCosmetic>>,
    pub cars: Option<Vec<CarCosmetic>>,
    pub lego: Option<Vec<LegoCosmetic>>,
    pub lego_kits: Option<Vec<LegoKit>>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// Recently added battle royale cosmetics
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrCosmetics {
    pub build: String,
    pub previous_build: String,
    pub hash: String,
    pub date: DateString,
    pub last_addition: DateString,
    pub items: Vec<BrCosmetic>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}
