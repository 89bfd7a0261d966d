use common::{PlayerState, Round, Snapshot};

use crate::actors::{interpolate_players, IdentityIndex};
use crate::locator::{locate, Bracket};

/// Players and the authoritative snapshot of a round at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledRound<'r> {
    pub players: Vec<PlayerState>,
    /// The raw snapshot closest to the sampled time.
    pub snapshot: &'r Snapshot,
}

/// Per round lookup structures, built once when a match is loaded.
///
/// Snapshots never change after parsing, so the identity index of every
/// snapshot and the set of earlier deaths missing from it are computed up
/// front and sampling stays a pure function of the query time.
#[derive(Debug)]
pub struct RoundTimeline<'r> {
    round: &'r Round,
    indexes: Vec<IdentityIndex>,
    corpses: Vec<Vec<PlayerState>>,
}

impl<'r> RoundTimeline<'r> {
    #[tracing::instrument(name = "Timeline", skip_all, fields(round = round.number))]
    pub fn new(round: &'r Round) -> Self {
        let indexes: Vec<_> = round.snapshots.iter().map(IdentityIndex::build).collect();

        let mut dead = std::collections::BTreeMap::<u64, &PlayerState>::new();
        let mut corpses = Vec::with_capacity(round.snapshots.len());
        for (snapshot, index) in round.snapshots.iter().zip(indexes.iter()) {
            let missing: Vec<PlayerState> = dead
                .iter()
                .filter(|(id, _)| !index.contains(**id))
                .map(|(_, state)| (*state).clone())
                .collect();
            corpses.push(missing);

            for player in snapshot.players.iter() {
                if player.is_alive {
                    dead.remove(&player.steam_id);
                } else {
                    dead.insert(player.steam_id, player);
                }
            }
        }

        tracing::debug!(
            snapshots = round.snapshots.len(),
            deaths = dead.len(),
            "Built timeline"
        );

        Self {
            round,
            indexes,
            corpses,
        }
    }

    pub fn round(&self) -> &'r Round {
        self.round
    }

    pub fn duration(&self) -> f64 {
        self.round.duration()
    }

    pub fn locate(&self, time: f64) -> Option<Bracket<'r, Snapshot>> {
        let round = self.round;
        locate(&round.snapshots, time)
    }

    /// World state of the round at `time`, `None` if there are no snapshots.
    pub fn sample(&self, time: f64) -> Option<SampledRound<'r>> {
        let bracket = self.locate(time)?;

        let mut players = if bracket.is_boundary() {
            bracket.next.players.clone()
        } else {
            interpolate_players(
                bracket.prev,
                &self.indexes[bracket.prev_index],
                bracket.next,
                bracket.ratio,
            )
        };
        players.extend(self.corpses[bracket.next_index].iter().cloned());

        Some(SampledRound {
            players,
            snapshot: bracket.authoritative(),
        })
    }
}
