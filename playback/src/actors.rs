use common::{PlayerState, Snapshot};

use crate::math::{angle_lerp, lerp};

/// Blends one player between two snapshots.
///
/// Position and yaw are interpolated, everything else comes from `next`.
/// A dead `next` is returned as is, deaths are never interpolated.
pub fn interpolate_player(prev: &PlayerState, next: &PlayerState, ratio: f64) -> PlayerState {
    if !next.is_alive {
        return next.clone();
    }

    PlayerState {
        x: lerp(prev.x, next.x, ratio),
        y: lerp(prev.y, next.y, ratio),
        z: lerp(prev.z, next.z, ratio),
        yaw: angle_lerp(prev.yaw, next.yaw, ratio),
        ..next.clone()
    }
}

/// Lookup from steam id to the player's position in a snapshot.
#[derive(Debug, Clone, Default)]
pub struct IdentityIndex {
    positions: std::collections::HashMap<u64, usize>,
}

impl IdentityIndex {
    pub fn build(snapshot: &Snapshot) -> Self {
        let positions = snapshot
            .players
            .iter()
            .enumerate()
            .map(|(idx, player)| (player.steam_id, idx))
            .collect();

        Self { positions }
    }

    pub fn contains(&self, steam_id: u64) -> bool {
        self.positions.contains_key(&steam_id)
    }

    pub fn find<'s>(&self, snapshot: &'s Snapshot, steam_id: u64) -> Option<&'s PlayerState> {
        self.positions
            .get(&steam_id)
            .and_then(|idx| snapshot.players.get(*idx))
    }
}

/// Interpolates every player of `next`, matched by id against `prev`.
///
/// Players only present in `prev` are dropped, players only present in
/// `next` are taken verbatim.
pub fn interpolate_players(
    prev: &Snapshot,
    prev_index: &IdentityIndex,
    next: &Snapshot,
    ratio: f64,
) -> Vec<PlayerState> {
    next.players
        .iter()
        .map(|next_player| match prev_index.find(prev, next_player.steam_id) {
            Some(prev_player) => interpolate_player(prev_player, next_player, ratio),
            None => next_player.clone(),
        })
        .collect()
}
