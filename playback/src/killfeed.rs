use common::{KillEvent, PlayerState, Side};

/// How long a kill stays in the feed, in seconds of round time.
pub const DISPLAY_DURATION: f64 = 5.0;
/// Maximum number of kills shown at once.
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedPlayer {
    pub steam_id: u64,
    /// `"?"` when the player is not part of the current frame.
    pub name: String,
    pub team: Option<Side>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KillFeedEntry {
    pub time_in_round: f64,
    pub attacker: FeedPlayer,
    pub victim: FeedPlayer,
    pub weapon: String,
    pub headshot: bool,
    pub wallbang: bool,
}

/// Kills within `window` seconds before `time`, oldest first, at most `max`.
pub fn visible_kills(
    kills: &[KillEvent],
    players: &[PlayerState],
    time: f64,
    window: f64,
    max: usize,
) -> Vec<KillFeedEntry> {
    let mut visible: Vec<&KillEvent> = kills
        .iter()
        .filter(|k| k.time_in_round <= time && k.time_in_round > time - window)
        .collect();
    visible.sort_by(|a, b| a.time_in_round.total_cmp(&b.time_in_round));

    let skip = visible.len().saturating_sub(max);

    visible
        .into_iter()
        .skip(skip)
        .map(|kill| KillFeedEntry {
            time_in_round: kill.time_in_round,
            attacker: feed_player(players, kill.attacker),
            victim: feed_player(players, kill.victim),
            weapon: kill.weapon.clone(),
            headshot: kill.headshot,
            wallbang: kill.wallbang,
        })
        .collect()
}

fn feed_player(players: &[PlayerState], steam_id: u64) -> FeedPlayer {
    match players.iter().find(|p| p.steam_id == steam_id) {
        Some(player) => FeedPlayer {
            steam_id,
            name: player.name.clone(),
            team: Some(player.team),
        },
        None => FeedPlayer {
            steam_id,
            name: "?".to_owned(),
            team: None,
        },
    }
}
