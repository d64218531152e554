pub mod aes;
pub mod banner;
pub mod cosmetic;
pub mod creator_code;
pub mod language;
pub mod map;
pub mod news;
pub mod options;
pub mod playlist;
pub mod shop;
pub mod stats;

pub use self::{
    aes::{
        Aes,
        DynamicKey,
    },
    banner::{
        Banner,
        BannerColor,
    },
    cosmetic::{
        AllCosmetics,
        BrCosmetic,
        CarCosmetic,
        InstrumentCosmetic,
        LegoCosmetic,
        LegoKit,
        NewBrCosmetics,
        NewCosmetics,
        TrackCosmetic,
    },
    creator_code::CreatorCode,
    language::{
        InvalidOption,
        Language,
    },
    map::FortniteMap,
    news::{
        AllNews,
        News,
    },
    options::{
        AccountType,
        AesKeyFormat,
        CosmeticFilters,
        CosmeticType,
        FilterCosmeticsOptions,
        FindCosmeticOptions,
        MatchMethod,
        NewsMode,
        StatsImage,
        StatsOptions,
        TimeWindow,
    },
    playlist::Playlist,
    shop::{
        BrShop,
        CombinedShop,
        Shop,
    },
    stats::Stats,
};
use std::collections::HashMap;

/// A timestamp string as sent by the api, like `2019-08-02T09:37:24Z`
pub type DateString = String;

/// Any api json object, kept around for fields that are not modeled
pub type UnknownFields = HashMap<String, serde_json::Value>;

/// The envelope around every api response.
///
/// Success is `{ "status": 200, "data": ... }`.
/// Errors are `{ "status": 404, "error": "..." }`,
/// though some older responses omit `status` and only send `error`.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub status: Option<u16>,

    #[serde(default)]
    pub data: serde_json::Value,

    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Whether this envelope describes a failure.
    pub(crate) fn is_error(&self) -> bool {
        self.error.is_some() || self.status.is_some_and(|status| status != crate::SUCCESS_STATUS)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn envelope_discriminates() {
        let ok: Envelope = serde_json::from_str(r#"{"status":200,"data":{"a":1}}"#).unwrap();
        assert!(!ok.is_error());

        let err: Envelope = serde_json::from_str(r#"{"status":404,"error":"not found"}"#).unwrap();
        assert!(err.is_error());

        let legacy: Envelope = serde_json::from_str(r#"{"error":"bad request"}"#).unwrap();
        assert!(legacy.is_error());
        assert_eq!(legacy.status, None);

        let no_status: Envelope = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(!no_status.is_error());

        let bad_status: Envelope = serde_json::from_str(r#"{"status":403}"#).unwrap();
        assert!(bad_status.is_error());
    }
}
