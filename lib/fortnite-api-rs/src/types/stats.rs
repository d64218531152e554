use super::{
    DateString,
    UnknownFields,
};

/// Battle royale stats for an account
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub account: StatsAccount,
    pub battle_pass: Option<BattlePass>,

    /// A rendered image url, only present if one was requested
    pub image: Option<String>,
    pub stats: InputStats,

    #[serde(flatten)]
    pub unknown: UnknownFields,
}

/// The account stats belong to
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct StatsAccount {
    pub id: String,
    pub name: String,
}

/// Battle pass progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct BattlePass {
    pub level: u32,

    /// Percent progress towards the next level
    pub progress: u32,
}

/// Stats split by input type
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputStats {
    pub all: Option<PlatformStats>,
    pub keyboard_mouse: Option<PlatformStats>,
    pub gamepad: Option<PlatformStats>,
    pub touch: Option<PlatformStats>,
}

/// Stats for one input type, split by mode
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PlatformStats {
    pub overall: Option<ModeStats>,
    pub solo: Option<ModeStats>,
    pub duo: Option<ModeStats>,
    pub trio: Option<ModeStats>,
    pub squad: Option<ModeStats>,
    pub ltm: Option<ModeStats>,
}

/// Stats for one mode.
///
/// Placement fields depend on the mode, so they are all optional.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeStats {
    pub score: u64,
    pub score_per_min: f64,
    pub score_per_match: f64,
    pub wins: u64,
    pub kills: u64,
    pub kills_per_min: f64,
    pub kills_per_match: f64,
    pub deaths: u64,
    pub kd: f64,
    pub matches: u64,
    pub win_rate: f64,
    pub minutes_played: u64,
    pub players_outlived: u64,
    pub last_modified: DateString,

    pub top3: Option<u64>,
    pub top5: Option<u64>,
    pub top6: Option<u64>,
    pub top10: Option<u64>,
    pub top12: Option<u64>,
    pub top25: Option<u64>,
}
