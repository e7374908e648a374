//! Level state: static obstacle grid, live actors, and win/lose status

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorKind};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;

/// Terrain occupying a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    /// `'x'` is wall, `'!'` is lava, anything else is open space
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Obstacle::Wall => 'x',
            Obstacle::Lava => '!',
        }
    }
}

/// Rows of cells, `None` is passable. Rows may be ragged.
pub type Grid = Vec<Vec<Option<Obstacle>>>;

/// Terminal level result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
}

/// Something the player has come into contact with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Touch {
    Wall,
    Lava,
    Fireball,
    Coin,
    Player,
    /// Any actor without a touch rule
    Actor,
}

impl From<Obstacle> for Touch {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => Touch::Wall,
            Obstacle::Lava => Touch::Lava,
        }
    }
}

impl From<ActorKind> for Touch {
    fn from(kind: ActorKind) -> Self {
        kind.touch()
    }
}

/// A single playable level
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    grid: Grid,
    /// Insertion order is iteration order
    actors: Vec<Actor>,
    /// First player actor found at construction
    player: Option<ActorId>,
    width: usize,
    height: usize,
    status: Option<Outcome>,
    /// Seconds left before a decided level counts as finished
    pub finish_delay: f64,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let players = actors
            .iter()
            .filter(|a| a.kind() == ActorKind::Player)
            .count();
        if players > 1 {
            log::warn!("Level has {} players, only the first is tracked", players);
        }
        let player = actors
            .iter()
            .find(|a| a.kind() == ActorKind::Player)
            .map(Actor::id);
        let width = grid.iter().map(Vec::len).max().unwrap_or(0);
        let height = grid.len();

        Self {
            grid,
            actors,
            player,
            width,
            height,
            status: None,
            finish_delay: FINISH_DELAY,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Longest row length
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn status(&self) -> Option<Outcome> {
        self.status
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id() == id)
    }

    /// The player actor, if the level has one
    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    /// Obstacle in a single cell; out-of-range cells on short rows are open
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.grid.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Decided and done lingering
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First actor, in insertion order, intersecting `actor`
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|other| other.is_intersecting(actor))
    }

    /// First obstacle overlapped by the footprint `pos`/`size`.
    ///
    /// Leaving the level sideways or through the top counts as wall, falling
    /// out the bottom counts as lava. Bounds win over grid contents.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Option<Obstacle> {
        let left = pos.x().floor();
        let right = (pos.x() + size.x()).ceil();
        let top = pos.y().floor();
        let bottom = (pos.y() + size.y()).ceil();

        if left < 0.0 || right > self.width as f64 || top < 0.0 {
            return Some(Obstacle::Wall);
        }
        if bottom > self.height as f64 {
            return Some(Obstacle::Lava);
        }

        let (left, right) = (left as usize, right as usize);
        let (top, bottom) = (top as usize, bottom as usize);
        for y in top..bottom {
            for x in left..right {
                if let Some(obstacle) = self.cell(x, y) {
                    return Some(obstacle);
                }
            }
        }
        None
    }

    /// Remove by identity; absent ids are ignored
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|a| a.id() == id)?;
        Some(self.actors.remove(index))
    }

    /// No remaining actor shares `kind`'s type name
    pub fn no_more_actors(&self, kind: ActorKind) -> bool {
        !self
            .actors
            .iter()
            .any(|a| a.type_name() == kind.type_name())
    }

    /// React to the player touching `touch`. `actor` is the touched actor's id
    /// and kind as seen at contact time. Once a status is set, every further
    /// touch is ignored.
    pub fn player_touched(&mut self, touch: Touch, actor: Option<(ActorId, ActorKind)>) {
        if self.status.is_some() {
            return;
        }
        match touch {
            Touch::Lava | Touch::Fireball => self.finish(Outcome::Lost),
            Touch::Coin => {
                let Some((id, ActorKind::Coin)) = actor else {
                    return;
                };
                // The coin may already be gone; the win check still runs
                if self.remove_actor(id).is_some() {
                    log::debug!("Coin {:?} collected", id);
                }
                if self.no_more_actors(ActorKind::Coin) {
                    self.finish(Outcome::Won);
                }
            }
            Touch::Wall | Touch::Player | Touch::Actor => {}
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("Level {:?}", outcome);
        self.status = Some(outcome);
    }

    /// Burn down the finish delay once the level is decided
    pub fn count_down(&mut self, dt: f64) {
        if self.status.is_some() {
            self.finish_delay -= dt;
        }
    }

    /// Swap in an actor's advanced state, matched by id
    pub(crate) fn replace_actor(&mut self, actor: Actor) {
        if let Some(slot) = self.actors.iter_mut().find(|a| a.id() == actor.id()) {
            *slot = actor;
        }
    }

    /// Mutable access for input collaborators steering the player
    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        let id = self.player?;
        self.actors.iter_mut().find(|a| a.id() == id)
    }
}
