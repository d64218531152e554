use super::{
    BrCosmetic,
    DateString,
    UnknownFields,
};

/// The current item shop
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub hash: String,
    pub date: DateString,
    pub vbuck_icon: String,
    #[serde(default)]
    pub entries: Vec<ShopEntry>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// The battle royale item shop, with normal and special sections kept apart
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrShop {
    #[serde(flatten)]
    pub shop: CombinedShop,

    pub special_featured: Option<ShopCategory>,
    pub special_daily: Option<ShopCategory>,
}

/// The battle royale item shop, with normal and special sections merged
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedShop {
    pub hash: String,
    pub date: DateString,
    pub vbuck_icon: Option<String>,
    pub featured: Option<ShopCategory>,
    pub daily: Option<ShopCategory>,
    pub votes: Option<Vec<ShopCategory>>,
    pub vote_winners: Option<Vec<ShopCategory>>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A shop section
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ShopCategory {
    pub name: Option<String>,
    #[serde(default)]
    pub entries: Vec<ShopEntry>,
}

/// An offer in the shop
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntry {
    pub regular_price: u32,
    pub final_price: u32,
    pub bundle: Option<ShopBundle>,
    pub banner: Option<ShopBanner>,
    #[serde(default)]
    pub giftable: bool,
    #[serde(default)]
    pub refundable: bool,
    #[serde(default)]
    pub sort_priority: i32,
    pub dev_name: Option<String>,
    pub offer_id: Option<String>,
    pub tile_size: Option<String>,
    pub layout_id: Option<String>,

    /// Battle royale items, as sent by the battle royale shop
    pub items: Option<Vec<BrCosmetic>>,

    /// Battle royale items, as sent by the newer shop
    pub br_items: Option<Vec<BrCosmetic>>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

impl ShopEntry {
    /// Get the battle royale items in this entry, whichever shop it came from.
    pub fn br_cosmetics(&self) -> &[BrCosmetic] {
        self.br_items
            .as_deref()
            .or(self.items.as_deref())
            .unwrap_or_default()
    }
}

/// A bundle offer
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ShopBundle {
    pub name: String,
    pub info: Option<String>,
    pub image: String,
}

/// A banner shown on a shop tile
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopBanner {
    pub value: String,
    pub intensity: String,
    pub backend_value: String,
}
