use crate::nullable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ct,
    T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    Elimination,
    BombDefused,
    BombExploded,
    Time,
    /// Draws, surrenders and anything else the parser does not name.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub number: u32,
    pub winner: Side,
    pub win_reason: WinReason,
    #[serde(rename = "endTScore")]
    pub end_t_score: u32,
    #[serde(rename = "endCTScore")]
    pub end_ct_score: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub snapshots: Vec<Snapshot>,
    #[serde(default, deserialize_with = "nullable")]
    pub kills: Vec<KillEvent>,
    #[serde(default, deserialize_with = "nullable")]
    pub grenades: Vec<GrenadeEvent>,
}

impl Round {
    /// Time in round of the last snapshot, 0 without snapshots.
    pub fn duration(&self) -> f64 {
        self.snapshots
            .last()
            .map(|s| s.time_in_round)
            .unwrap_or(0.0)
    }

    /// Score of `side` after this round.
    pub fn end_score(&self, side: Side) -> u32 {
        match side {
            Side::Ct => self.end_ct_score,
            Side::T => self.end_t_score,
        }
    }

    /// Score of `side` going into this round.
    pub fn start_score(&self, side: Side) -> u32 {
        let won = u32::from(self.winner == side);
        self.end_score(side).saturating_sub(won)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub tick: u32,
    pub time_in_round: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bomb: Option<Bomb>,
    #[serde(default, deserialize_with = "nullable")]
    pub players: Vec<PlayerState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BombState {
    Carried,
    Planted,
    Dropped,
    Defused,
    Exploded,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bomb {
    pub x: f64,
    pub y: f64,
    pub state: BombState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub steam_id: u64,
    pub name: String,
    pub team: Side,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Degrees, east is 0 and counter-clockwise is positive.
    pub yaw: f64,
    pub hp: i32,
    pub armor: i32,
    pub is_alive: bool,
    pub weapon: String,
    pub has_defuser: bool,
    /// Flash blindness in `[0, 1]`.
    pub flash_alpha: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillEvent {
    pub tick: u32,
    pub time_in_round: f64,
    pub attacker: u64,
    pub victim: u64,
    pub weapon: String,
    pub headshot: bool,
    pub wallbang: bool,
    pub attacker_x: f64,
    pub attacker_y: f64,
    pub victim_x: f64,
    pub victim_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrenadeKind {
    Smoke,
    Flash,
    He,
    Molotov,
    Incendiary,
    Decoy,
    #[serde(other)]
    Unknown,
}

impl GrenadeKind {
    /// Whether the grenade leaves an area effect behind after detonating.
    pub fn lingers(self) -> bool {
        matches!(
            self,
            Self::Smoke | Self::Molotov | Self::Incendiary | Self::Decoy
        )
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrenadeEvent {
    #[serde(rename = "type")]
    pub kind: GrenadeKind,
    #[serde(default)]
    pub thrower: u64,

    #[serde(default)]
    pub throw_tick: u32,
    pub throw_time: f64,
    #[serde(default)]
    pub throw_x: f64,
    #[serde(default)]
    pub throw_y: f64,

    #[serde(default)]
    pub detonate_tick: u32,
    /// 0 when the grenade never detonated.
    #[serde(default)]
    pub detonate_time: f64,
    #[serde(default)]
    pub detonate_x: f64,
    #[serde(default)]
    pub detonate_y: f64,

    #[serde(default)]
    pub effect_duration: f64,

    #[serde(default, deserialize_with = "nullable")]
    pub trajectory: Vec<TrajectoryPoint>,
}

impl GrenadeEvent {
    pub fn detonation_time(&self) -> Option<f64> {
        Some(self.detonate_time).filter(|t| *t > 0.0)
    }

    /// End of the lingering effect, if this grenade has one.
    pub fn effect_end(&self) -> Option<f64> {
        if !self.kind.lingers() || self.effect_duration <= 0.0 {
            return None;
        }

        self.detonation_time().map(|t| t + self.effect_duration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrajectoryPoint {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}
