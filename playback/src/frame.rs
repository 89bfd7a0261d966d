//! What the renderer gets to see every frame.

use common::{BombState, GrenadeKind, PlayerState, Side};

use crate::grenades::GrenadePhase;
use crate::killfeed::KillFeedEntry;
use crate::projection::Point;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub round_index: usize,
    pub round_number: u32,
    pub current_time: f64,
    pub round_duration: f64,
    pub is_playing: bool,
    pub speed: f64,
    /// Score going into the displayed round.
    pub score: Score,
    pub players: Vec<ProjectedPlayer>,
    pub grenades: Vec<ProjectedGrenade>,
    pub bomb: Option<ProjectedBomb>,
    pub kill_feed: Vec<KillFeedEntry>,
}

impl Frame {
    /// Players of one side ordered by steam id, as listed in a team panel.
    pub fn team(&self, side: Side) -> Vec<&ProjectedPlayer> {
        let mut players: Vec<_> = self
            .players
            .iter()
            .filter(|p| p.state.team == side)
            .collect();
        players.sort_by_key(|p| p.state.steam_id);
        players
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Score {
    pub ct: u32,
    pub t: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedPlayer {
    #[serde(flatten)]
    pub state: PlayerState,
    pub screen: Point,
    /// Clockwise radians for the view cone.
    pub screen_yaw: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedGrenade {
    #[serde(rename = "type")]
    pub kind: GrenadeKind,
    pub thrower: u64,
    pub phase: GrenadePhase,
    pub screen: Point,
    pub trail: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProjectedBomb {
    pub state: BombState,
    pub carrier: Option<u64>,
    pub screen: Point,
}
