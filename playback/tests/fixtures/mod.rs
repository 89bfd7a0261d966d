#![allow(dead_code)]

use common::{
    Bomb, BombState, GrenadeEvent, GrenadeKind, KillEvent, MapConfig, PlayerState, Round, Side,
    Snapshot, TrajectoryPoint, WinReason,
};

pub fn player(steam_id: u64, team: Side, x: f64, y: f64, yaw: f64) -> PlayerState {
    PlayerState {
        steam_id,
        name: format!("player-{}", steam_id),
        team,
        x,
        y,
        z: 0.0,
        yaw,
        hp: 100,
        armor: 100,
        is_alive: true,
        weapon: "ak47".to_owned(),
        has_defuser: false,
        flash_alpha: 0.0,
    }
}

pub fn dead(mut state: PlayerState) -> PlayerState {
    state.is_alive = false;
    state.hp = 0;
    state
}

pub fn snapshot(tick: u32, time_in_round: f64, players: Vec<PlayerState>) -> Snapshot {
    Snapshot {
        tick,
        time_in_round,
        bomb: None,
        players,
    }
}

pub fn with_bomb(mut snapshot: Snapshot, x: f64, y: f64, state: BombState) -> Snapshot {
    snapshot.bomb = Some(Bomb {
        x,
        y,
        state,
        carrier: None,
    });
    snapshot
}

pub fn round(number: u32, snapshots: Vec<Snapshot>) -> Round {
    Round {
        number,
        winner: Side::Ct,
        win_reason: WinReason::Elimination,
        end_t_score: 0,
        end_ct_score: number,
        snapshots,
        kills: Vec::new(),
        grenades: Vec::new(),
    }
}

pub fn kill(time_in_round: f64, attacker: u64, victim: u64) -> KillEvent {
    KillEvent {
        tick: (time_in_round * 64.0) as u32,
        time_in_round,
        attacker,
        victim,
        weapon: "ak47".to_owned(),
        headshot: false,
        wallbang: false,
        attacker_x: 0.0,
        attacker_y: 0.0,
        victim_x: 0.0,
        victim_y: 0.0,
    }
}

pub fn grenade(
    kind: GrenadeKind,
    throw_time: f64,
    trajectory: &[(f64, f64, f64)],
    detonate_time: f64,
    effect_duration: f64,
) -> GrenadeEvent {
    let trajectory: Vec<_> = trajectory
        .iter()
        .map(|(t, x, y)| TrajectoryPoint {
            t: *t,
            x: *x,
            y: *y,
        })
        .collect();
    let (detonate_x, detonate_y) = trajectory
        .last()
        .map(|p| (p.x, p.y))
        .unwrap_or((0.0, 0.0));

    GrenadeEvent {
        kind,
        thrower: 1,
        throw_tick: 0,
        throw_time,
        throw_x: 0.0,
        throw_y: 0.0,
        detonate_tick: 0,
        detonate_time,
        detonate_x,
        detonate_y,
        effect_duration,
        trajectory,
    }
}

/// Map config where world and surface coordinates line up 1:1, with y flipped.
pub fn identity_map() -> MapConfig {
    MapConfig {
        name: "de_test".to_owned(),
        display_name: "Test".to_owned(),
        pos_x: 0.0,
        pos_y: 0.0,
        scale: 1.0,
        radar_file: String::new(),
        lower_radar_file: None,
        radar_width: 1024,
        radar_height: 1024,
    }
}

pub fn dust2() -> MapConfig {
    MapConfig {
        name: "de_dust2".to_owned(),
        display_name: "Dust II".to_owned(),
        pos_x: -2476.0,
        pos_y: 3239.0,
        scale: 4.4,
        radar_file: "de_dust2.png".to_owned(),
        lower_radar_file: None,
        radar_width: 1024,
        radar_height: 1024,
    }
}

/// Two players walking east over ten evenly spaced snapshots.
pub fn walking_round() -> Round {
    let snapshots = (0..10)
        .map(|i| {
            let t = i as f64;
            snapshot(
                i * 64,
                t,
                vec![
                    player(1, Side::Ct, t * 10.0, 0.0, 0.0),
                    player(2, Side::T, -t * 10.0, 50.0, 180.0),
                ],
            )
        })
        .collect();

    round(1, snapshots)
}
