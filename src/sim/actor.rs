//! Actors: everything on the level that is not terrain
//!
//! Behaviour is chosen by `ActorKind` through a small capability table
//! (`Behavior`) instead of a type hierarchy. Each kind picks how it acts per
//! tick and how it reacts when its next move would hit an obstacle.

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::{Level, Touch};
use super::vector::Vector;
use crate::consts::*;

/// Stable identity of an actor within a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Concrete actor variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// Inert actor, does nothing
    Generic,
    Player,
    /// Fireball with an arbitrary velocity, bounces off obstacles
    Fireball,
    HorizontalFireball,
    VerticalFireball,
    /// Falls and restarts from its spawn point when blocked
    FireRain,
    Coin,
}

impl ActorKind {
    pub const ALL: [ActorKind; 7] = [
        ActorKind::Generic,
        ActorKind::Player,
        ActorKind::Fireball,
        ActorKind::HorizontalFireball,
        ActorKind::VerticalFireball,
        ActorKind::FireRain,
        ActorKind::Coin,
    ];

    /// Name used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            ActorKind::Generic => "generic",
            ActorKind::Player => "player",
            ActorKind::Fireball => "fireball",
            ActorKind::HorizontalFireball => "horizontal_fireball",
            ActorKind::VerticalFireball => "vertical_fireball",
            ActorKind::FireRain => "fire_rain",
            ActorKind::Coin => "coin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Coarse type name; every fireball variant reports `"fireball"`
    pub fn type_name(self) -> &'static str {
        match self.touch() {
            Touch::Player => "player",
            Touch::Fireball => "fireball",
            Touch::Coin => "coin",
            _ => "actor",
        }
    }

    /// What the player has run into when it meets an actor of this kind
    pub fn touch(self) -> Touch {
        match self {
            ActorKind::Generic => Touch::Actor,
            ActorKind::Player => Touch::Player,
            ActorKind::Fireball
            | ActorKind::HorizontalFireball
            | ActorKind::VerticalFireball
            | ActorKind::FireRain => Touch::Fireball,
            ActorKind::Coin => Touch::Coin,
        }
    }

    fn behavior(self) -> Behavior {
        match self {
            ActorKind::Generic | ActorKind::Player => Behavior::STILL,
            ActorKind::Fireball | ActorKind::HorizontalFireball | ActorKind::VerticalFireball => {
                Behavior::BOUNCING
            }
            ActorKind::FireRain => Behavior::LOOPING,
            ActorKind::Coin => Behavior::BOBBING,
        }
    }
}

/// Per-kind capabilities
#[derive(Clone, Copy)]
struct Behavior {
    act: fn(&mut Actor, f64, &Level),
    on_obstacle: fn(&mut Actor),
}

impl Behavior {
    const STILL: Self = Self {
        act: act_still,
        on_obstacle: ignore_obstacle,
    };
    const BOUNCING: Self = Self {
        act: act_linear,
        on_obstacle: bounce,
    };
    const LOOPING: Self = Self {
        act: act_linear,
        on_obstacle: return_to_start,
    };
    const BOBBING: Self = Self {
        act: act_spring,
        on_obstacle: ignore_obstacle,
    };
}

fn act_still(_actor: &mut Actor, _dt: f64, _level: &Level) {}

fn ignore_obstacle(_actor: &mut Actor) {}

/// Constant-velocity motion, blocked moves defer to the obstacle handler
fn act_linear(actor: &mut Actor, dt: f64, level: &Level) {
    let next = actor.next_position(dt);
    if level.obstacle_at(next, actor.size).is_some() {
        (actor.kind.behavior().on_obstacle)(actor);
    } else {
        actor.pos = next;
    }
}

fn bounce(actor: &mut Actor) {
    actor.speed = actor.speed.times(-1.0);
}

fn return_to_start(actor: &mut Actor) {
    actor.pos = actor.start;
}

/// Vertical bobbing around the anchor; terrain is never consulted
fn act_spring(actor: &mut Actor, dt: f64, _level: &Level) {
    actor.spring += SPRING_SPEED * dt;
    let wobble = Vector::new(0.0, actor.spring.sin() * SPRING_DIST);
    actor.pos = actor.start.plus(wobble);
}

/// A moving or static entity with an axis-aligned bounding box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Actor {
    id: ActorId,
    kind: ActorKind,
    pos: Vector,
    size: Vector,
    speed: Vector,
    /// Position after spawn offsets; fire rain resets here, coins bob around it
    start: Vector,
    /// Coin spring phase in radians (unused by other kinds)
    spring: f64,
}

impl Actor {
    /// Generic actor. Negative size components are clamped to zero.
    pub fn new(id: ActorId, pos: Vector, size: Vector, speed: Vector) -> Self {
        Self::with_kind(id, ActorKind::Generic, pos, size, speed)
    }

    fn with_kind(id: ActorId, kind: ActorKind, pos: Vector, size: Vector, speed: Vector) -> Self {
        Self {
            id,
            kind,
            pos,
            size: Vector::new(size.x().max(0.0), size.y().max(0.0)),
            speed,
            start: pos,
            spring: 0.0,
        }
    }

    /// Build the actor a level plan symbol stands for, spawned at grid cell `cell`
    pub fn spawn(kind: ActorKind, id: ActorId, cell: Vector, rng: &mut impl Rng) -> Self {
        match kind {
            ActorKind::Generic => Self::new(id, cell, ACTOR_SIZE.into(), Vector::ZERO),
            ActorKind::Player => Self::player(id, cell),
            ActorKind::Fireball => Self::fireball(id, cell, Vector::ZERO),
            ActorKind::HorizontalFireball => Self::horizontal_fireball(id, cell),
            ActorKind::VerticalFireball => Self::vertical_fireball(id, cell),
            ActorKind::FireRain => Self::fire_rain(id, cell),
            ActorKind::Coin => Self::coin(id, cell, rng),
        }
    }

    pub fn player(id: ActorId, cell: Vector) -> Self {
        Self::with_kind(
            id,
            ActorKind::Player,
            cell.plus(PLAYER_OFFSET.into()),
            PLAYER_SIZE.into(),
            Vector::ZERO,
        )
    }

    pub fn fireball(id: ActorId, pos: Vector, speed: Vector) -> Self {
        Self::with_kind(id, ActorKind::Fireball, pos, FIREBALL_SIZE.into(), speed)
    }

    pub fn horizontal_fireball(id: ActorId, pos: Vector) -> Self {
        Self::with_kind(
            id,
            ActorKind::HorizontalFireball,
            pos,
            FIREBALL_SIZE.into(),
            HORIZONTAL_FIREBALL_SPEED.into(),
        )
    }

    pub fn vertical_fireball(id: ActorId, pos: Vector) -> Self {
        Self::with_kind(
            id,
            ActorKind::VerticalFireball,
            pos,
            FIREBALL_SIZE.into(),
            VERTICAL_FIREBALL_SPEED.into(),
        )
    }

    pub fn fire_rain(id: ActorId, pos: Vector) -> Self {
        Self::with_kind(
            id,
            ActorKind::FireRain,
            pos,
            FIREBALL_SIZE.into(),
            FIRE_RAIN_SPEED.into(),
        )
    }

    /// Coin with a random spring phase in `[0, 2π)` drawn from `rng`
    pub fn coin(id: ActorId, cell: Vector, rng: &mut impl Rng) -> Self {
        Self::coin_with_phase(id, cell, rng.random_range(0.0..TAU))
    }

    pub fn coin_with_phase(id: ActorId, cell: Vector, phase: f64) -> Self {
        let mut coin = Self::with_kind(
            id,
            ActorKind::Coin,
            cell.plus(COIN_OFFSET.into()),
            COIN_SIZE.into(),
            Vector::ZERO,
        );
        coin.spring = phase;
        coin
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> ActorKind {
        self.kind
    }

    #[inline]
    pub fn pos(&self) -> Vector {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vector {
        self.size
    }

    #[inline]
    pub fn speed(&self) -> Vector {
        self.speed
    }

    /// Anchor position (spawn point after offsets)
    pub fn start(&self) -> Vector {
        self.start
    }

    pub fn spring(&self) -> f64 {
        self.spring
    }

    pub fn left(&self) -> f64 {
        self.pos.x()
    }

    pub fn top(&self) -> f64 {
        self.pos.y()
    }

    pub fn right(&self) -> f64 {
        self.pos.x() + self.size.x()
    }

    pub fn bottom(&self) -> f64 {
        self.pos.y() + self.size.y()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Where constant-velocity motion would take this actor after `dt`
    pub fn next_position(&self, dt: f64) -> Vector {
        self.pos.plus(self.speed.times(dt))
    }

    /// Strict AABB overlap; touching edges do not count and an actor never
    /// intersects itself
    pub fn is_intersecting(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.right() > other.left()
            && self.left() < other.right()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Advance this actor by `dt` seconds
    pub fn act(&mut self, dt: f64, level: &Level) {
        (self.kind.behavior().act)(self, dt, level);
    }

    /// Move the actor (used by input collaborators steering the player)
    pub fn set_pos(&mut self, pos: Vector) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{Grid, Obstacle};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn open_level(width: usize, height: usize) -> Level {
        Level::new(vec![vec![None; width]; height], Vec::new())
    }

    fn boxed(id: u32, x: f64, y: f64, w: f64, h: f64) -> Actor {
        Actor::new(
            ActorId(id),
            Vector::new(x, y),
            Vector::new(w, h),
            Vector::ZERO,
        )
    }

    #[test]
    fn test_generic_bounds() {
        let actor = boxed(1, 1.0, 2.0, 3.0, 4.0);
        assert_eq!(actor.left(), 1.0);
        assert_eq!(actor.top(), 2.0);
        assert_eq!(actor.right(), 4.0);
        assert_eq!(actor.bottom(), 6.0);
        assert_eq!(actor.type_name(), "actor");
    }

    #[test]
    fn test_negative_size_clamped() {
        let actor = boxed(1, 0.0, 0.0, -1.0, 2.0);
        assert_eq!(actor.size(), Vector::new(0.0, 2.0));
    }

    #[test]
    fn test_generic_act_is_noop() {
        let level = open_level(5, 5);
        let mut actor = boxed(1, 1.0, 1.0, 1.0, 1.0);
        let before = actor.clone();
        actor.act(1.0, &level);
        assert_eq!(actor, before);
    }

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = boxed(1, 0.0, 0.0, 2.0, 2.0);
        let b = boxed(2, 1.0, 1.0, 2.0, 2.0);
        assert!(a.is_intersecting(&b));
        assert!(b.is_intersecting(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = boxed(1, 0.0, 0.0, 1.0, 1.0);
        let right = boxed(2, 1.0, 0.0, 1.0, 1.0);
        let below = boxed(3, 0.0, 1.0, 1.0, 1.0);
        assert!(!a.is_intersecting(&right));
        assert!(!a.is_intersecting(&below));
    }

    #[test]
    fn test_contained_box_intersects() {
        let outer = boxed(1, 0.0, 0.0, 10.0, 10.0);
        let inner = boxed(2, 4.0, 4.0, 1.0, 1.0);
        assert!(outer.is_intersecting(&inner));
        assert!(inner.is_intersecting(&outer));
    }

    #[test]
    fn test_same_id_never_intersects() {
        let a = boxed(7, 0.0, 0.0, 1.0, 1.0);
        let copy = a.clone();
        assert!(!a.is_intersecting(&a));
        assert!(!a.is_intersecting(&copy));
    }

    #[test]
    fn test_player_spawn_offset() {
        let player = Actor::player(ActorId(1), Vector::new(3.0, 4.0));
        assert_eq!(player.pos(), Vector::new(3.0, 3.5));
        assert_eq!(player.size(), Vector::new(0.8, 1.5));
        assert_eq!(player.bottom(), 5.0);
        assert_eq!(player.type_name(), "player");
    }

    #[test]
    fn test_player_does_not_move_on_its_own() {
        let level = open_level(5, 5);
        let mut player = Actor::player(ActorId(1), Vector::new(1.0, 2.0));
        let before = player.pos();
        player.act(1.0, &level);
        assert_eq!(player.pos(), before);
    }

    #[test]
    fn test_fireball_variants() {
        let h = Actor::horizontal_fireball(ActorId(1), Vector::ZERO);
        let v = Actor::vertical_fireball(ActorId(2), Vector::ZERO);
        let r = Actor::fire_rain(ActorId(3), Vector::ZERO);
        assert_eq!(h.speed(), Vector::new(2.0, 0.0));
        assert_eq!(v.speed(), Vector::new(0.0, 2.0));
        assert_eq!(r.speed(), Vector::new(0.0, 3.0));
        for fireball in [&h, &v, &r] {
            assert_eq!(fireball.size(), Vector::new(1.0, 1.0));
            assert_eq!(fireball.type_name(), "fireball");
        }
    }

    #[test]
    fn test_fireball_next_position() {
        let fireball = Actor::fireball(ActorId(1), Vector::new(5.0, 5.0), Vector::new(2.0, 3.0));
        assert_eq!(fireball.next_position(1.0), Vector::new(7.0, 8.0));
        assert_eq!(fireball.next_position(2.0), Vector::new(9.0, 11.0));
    }

    #[test]
    fn test_fireball_moves_through_open_space() {
        let level = open_level(10, 10);
        let mut fireball = Actor::fireball(ActorId(1), Vector::new(5.0, 5.0), Vector::new(2.0, 3.0));
        fireball.act(1.0, &level);
        assert_eq!(fireball.pos(), Vector::new(7.0, 8.0));
        assert_eq!(fireball.speed(), Vector::new(2.0, 3.0));
    }

    fn walled_level() -> Level {
        let grid: Grid = vec![vec![None, Some(Obstacle::Wall), None]];
        Level::new(grid, Vec::new())
    }

    #[test]
    fn test_fireball_bounces_off_wall() {
        let level = walled_level();
        let mut fireball = Actor::horizontal_fireball(ActorId(1), Vector::ZERO);
        fireball.act(0.1, &level);
        assert_eq!(fireball.pos(), Vector::ZERO);
        assert_eq!(fireball.speed(), Vector::new(-2.0, 0.0));
    }

    #[test]
    fn test_fireball_bounces_off_lava() {
        let grid: Grid = vec![vec![None; 3], vec![None, Some(Obstacle::Lava), None]];
        let level = Level::new(grid, Vec::new());
        let mut fireball = Actor::vertical_fireball(ActorId(1), Vector::new(1.0, 0.0));
        fireball.act(0.5, &level);
        assert_eq!(fireball.pos(), Vector::new(1.0, 0.0));
        assert_eq!(fireball.speed(), Vector::new(0.0, -2.0));
    }

    #[test]
    fn test_fire_rain_returns_to_start() {
        let level = open_level(3, 4);
        let mut rain = Actor::fire_rain(ActorId(1), Vector::new(1.0, 0.0));
        rain.act(1.0, &level);
        assert_eq!(rain.pos(), Vector::new(1.0, 3.0));
        // Next move leaves the bottom of the level: blocked, back to the top
        rain.act(1.0, &level);
        assert_eq!(rain.pos(), Vector::new(1.0, 0.0));
        assert_eq!(rain.speed(), Vector::new(0.0, 3.0));
    }

    #[test]
    fn test_wall_hit_bounce_versus_reset() {
        let grid: Grid = vec![vec![None, None, Some(Obstacle::Wall)]];
        let level = Level::new(grid, Vec::new());

        let mut fireball = Actor::fireball(ActorId(1), Vector::ZERO, Vector::new(2.0, 0.0));
        let mut rain = Actor::fire_rain(ActorId(2), Vector::ZERO);
        // Send the rain sideways so both run into the same wall
        rain.speed = Vector::new(2.0, 0.0);

        for _ in 0..2 {
            fireball.act(0.25, &level);
            rain.act(0.25, &level);
        }
        assert_eq!(fireball.pos(), Vector::new(1.0, 0.0));
        assert_eq!(rain.pos(), Vector::new(1.0, 0.0));

        fireball.act(0.25, &level);
        rain.act(0.25, &level);
        assert_eq!(fireball.pos(), Vector::new(1.0, 0.0));
        assert_eq!(fireball.speed(), Vector::new(-2.0, 0.0));
        assert_eq!(rain.pos(), Vector::ZERO);
        assert_eq!(rain.speed(), Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_coin_spawn_offset() {
        let coin = Actor::coin_with_phase(ActorId(1), Vector::new(2.0, 3.0), 0.0);
        assert_eq!(coin.pos(), Vector::new(2.2, 3.1));
        assert_eq!(coin.start(), Vector::new(2.2, 3.1));
        assert_eq!(coin.size(), Vector::new(0.6, 0.6));
        assert_eq!(coin.type_name(), "coin");
    }

    #[test]
    fn test_coin_bobs_on_spring() {
        let level = open_level(5, 5);
        let mut coin = Actor::coin_with_phase(ActorId(1), Vector::new(1.0, 1.0), 0.0);
        coin.act(0.1, &level);
        let expected_phase = 0.8;
        assert!((coin.spring() - expected_phase).abs() < 1e-12);
        let expected_y = 1.1 + expected_phase.sin() * 0.07;
        assert!((coin.pos().y() - expected_y).abs() < 1e-12);
        assert!((coin.pos().x() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_coin_ignores_terrain() {
        // The coin sits entirely inside a wall cell and keeps bobbing
        let grid: Grid = vec![vec![Some(Obstacle::Wall)]];
        let level = Level::new(grid, Vec::new());
        let mut coin = Actor::coin_with_phase(ActorId(1), Vector::ZERO, 0.0);
        coin.act(0.2, &level);
        assert!(coin.pos().y() > 0.1);
    }

    #[test]
    fn test_coin_phase_in_range_and_seeded() {
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);
        for i in 0..64 {
            let a = Actor::coin(ActorId(i), Vector::ZERO, &mut rng_a);
            let b = Actor::coin(ActorId(i), Vector::ZERO, &mut rng_b);
            assert!((0.0..TAU).contains(&a.spring()));
            assert_eq!(a.spring(), b.spring());
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ActorKind::ALL {
            assert_eq!(ActorKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(ActorKind::from_name("dragon"), None);
    }

    fn any_box() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (-50.0f64..50.0, -50.0f64..50.0, 0.0f64..10.0, 0.0f64..10.0)
    }

    proptest! {
        #[test]
        fn prop_never_intersects_itself((x, y, w, h) in any_box()) {
            let a = boxed(1, x, y, w, h);
            prop_assert!(!a.is_intersecting(&a));
        }

        #[test]
        fn prop_intersection_is_symmetric(a in any_box(), b in any_box()) {
            let a = boxed(1, a.0, a.1, a.2, a.3);
            let b = boxed(2, b.0, b.1, b.2, b.3);
            prop_assert_eq!(a.is_intersecting(&b), b.is_intersecting(&a));
        }

        #[test]
        fn prop_disjoint_boxes_do_not_intersect(
            (x, y, w, h) in any_box(),
            gap in 0.0f64..5.0,
            (bw, bh) in (0.0f64..10.0, 0.0f64..10.0),
        ) {
            let a = boxed(1, x, y, w, h);
            let b = boxed(2, a.right() + gap, y, bw, bh);
            prop_assert!(!a.is_intersecting(&b));
            prop_assert!(!b.is_intersecting(&a));
        }

        #[test]
        fn prop_vertically_disjoint_boxes_do_not_intersect(
            (x, y, w, h) in any_box(),
            gap in 0.0f64..5.0,
            (bw, bh) in (0.0f64..10.0, 0.0f64..10.0),
        ) {
            let a = boxed(1, x, y, w, h);
            let b = boxed(2, x, a.bottom() + gap, bw, bh);
            prop_assert!(!a.is_intersecting(&b));
            prop_assert!(!b.is_intersecting(&a));
        }
    }
}
