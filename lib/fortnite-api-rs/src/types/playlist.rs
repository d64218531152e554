use super::{
    DateString,
    UnknownFields,
};

/// A playlist
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    pub name: Option<String>,
    pub sub_name: Option<String>,
    pub description: Option<String>,
    pub game_type: Option<String>,
    pub rating_type: Option<String>,
    pub min_players: i32,
    pub max_players: i32,
    pub max_teams: i32,
    pub max_team_size: i32,
    pub max_squads: i32,
    pub max_squad_size: i32,
    pub is_default: bool,
    pub is_tournament: bool,
    pub is_limited_time_mode: bool,
    pub is_large_team_game: bool,
    pub accumulate_to_profile_stats: bool,
    pub images: PlaylistImages,
    #[serde(default)]
    pub gameplay_tags: Vec<String>,
    pub path: String,
    pub added: DateString,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// Playlist image urls
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistImages {
    pub showcase: Option<String>,
    pub mission_icon: Option<String>,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}
