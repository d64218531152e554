use super::UnknownFields;

/// The current battle royale map
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FortniteMap {
    pub images: MapImages,

    /// Points of interest
    pub pois: Vec<Poi>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// Map image urls
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct MapImages {
    /// The map without labels
    pub blank: String,

    /// The map with poi labels
    pub pois: String,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A point of interest
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Poi {
    pub id: String,
    pub name: String,
    pub location: Location,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// A world position
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
