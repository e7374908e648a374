//! Fixed-order simulation tick
//!
//! Each step: every actor acts in insertion order, then the player's contacts
//! are resolved. Large deltas are split into steps no longer than `max_step`,
//! at most `MAX_SUBSTEPS` of them per tick.

use super::level::{Level, Obstacle, Touch};
use crate::consts::{MAX_STEP, MAX_SUBSTEPS};

/// Advance the level by `dt` seconds using the default step cap
pub fn tick(level: &mut Level, dt: f64) {
    tick_with_max_step(level, dt, MAX_STEP);
}

/// Advance the level by `dt` seconds in steps of at most `max_step`
pub fn tick_with_max_step(level: &mut Level, dt: f64, max_step: f64) {
    if !dt.is_finite() {
        log::warn!("Ignoring non-finite tick delta {}", dt);
        return;
    }
    let max_step = if max_step > 0.0 && max_step.is_finite() {
        max_step
    } else {
        dt
    };

    let mut remaining = dt;
    let mut substeps = 0;
    while remaining > 0.0 && substeps < MAX_SUBSTEPS {
        let step = remaining.min(max_step);
        step_actors(level, step);
        resolve_player_contacts(level);
        level.count_down(step);
        remaining -= step;
        substeps += 1;
    }
    if remaining > 0.0 {
        log::warn!("Tick hit {} substeps, dropping {:.3}s", MAX_SUBSTEPS, remaining);
    }
}

/// Run every actor's behaviour once. Each actor sees the others as already
/// updated for actors earlier in the list and not yet updated for later ones.
pub fn step_actors(level: &mut Level, dt: f64) {
    let ids: Vec<_> = level.actors().iter().map(|a| a.id()).collect();
    for id in ids {
        let Some(mut actor) = level.actor(id).cloned() else {
            continue;
        };
        actor.act(dt, level);
        level.replace_actor(actor);
    }
}

/// Apply the consequences of what the player is touching right now
pub fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player().cloned() else {
        return;
    };

    if level.obstacle_at(player.pos(), player.size()) == Some(Obstacle::Lava) {
        level.player_touched(Touch::Lava, None);
    }

    let contact = level
        .actor_at(&player)
        .map(|other| (other.kind().touch(), other.id(), other.kind()));
    if let Some((touch, id, kind)) = contact {
        level.player_touched(touch, Some((id, kind)));
    }
}
