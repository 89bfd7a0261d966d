pub mod map;
pub mod round;

mod list;

pub use map::MapConfig;
pub(crate) use list::nullable;

pub use round::{
    Bomb, BombState, GrenadeEvent, GrenadeKind, KillEvent, PlayerState, Round, Side, Snapshot,
    TrajectoryPoint, WinReason,
};

/// A fully parsed match, as handed over by the demo parser.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub map: String,
    pub tick_rate: f64,
    pub duration: f64,
    pub teams: Teams,
    #[serde(default, deserialize_with = "nullable")]
    pub rounds: Vec<Round>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_config: Option<MapConfig>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Teams {
    pub ct: TeamInfo,
    pub t: TeamInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamInfo {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub players: Vec<PlayerInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub steam_id: u64,
    pub name: String,
}
