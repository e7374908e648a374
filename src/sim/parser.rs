//! Level plan parsing
//!
//! A plan is a list of text rows, one character per grid cell. Terrain symbols
//! are fixed (`x` wall, `!` lava); actor symbols come from an `ActorDictionary`.

use std::collections::BTreeMap;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::{Actor, ActorId, ActorKind};
use super::level::{Grid, Level, Obstacle};
use super::vector::Vector;

/// Symbol-to-actor mapping used by `LevelParser`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorDictionary {
    entries: BTreeMap<char, ActorKind>,
}

impl ActorDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic mapping: `@` player, `v` fire rain, `o` coin,
    /// `=` horizontal fireball, `|` vertical fireball
    pub fn classic() -> Self {
        [
            ('@', ActorKind::Player),
            ('v', ActorKind::FireRain),
            ('o', ActorKind::Coin),
            ('=', ActorKind::HorizontalFireball),
            ('|', ActorKind::VerticalFireball),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, symbol: char, kind: ActorKind) -> Option<ActorKind> {
        self.entries.insert(symbol, kind)
    }

    pub fn get(&self, symbol: char) -> Option<ActorKind> {
        self.entries.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, ActorKind)> + '_ {
        self.entries.iter().map(|(&symbol, &kind)| (symbol, kind))
    }
}

impl FromIterator<(char, ActorKind)> for ActorDictionary {
    fn from_iter<I: IntoIterator<Item = (char, ActorKind)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Turns plans into levels. Coin phases are drawn from the parser's RNG, so a
/// seeded parser produces identical levels for identical plans.
#[derive(Debug, Clone)]
pub struct LevelParser<R = Pcg32> {
    dictionary: ActorDictionary,
    rng: R,
    next_id: u32,
}

impl LevelParser<Pcg32> {
    /// Parser with an unpredictable seed
    pub fn new(dictionary: ActorDictionary) -> Self {
        Self::with_seed(dictionary, rand::random())
    }

    pub fn with_seed(dictionary: ActorDictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> LevelParser<R> {
    pub fn with_rng(dictionary: ActorDictionary, rng: R) -> Self {
        Self {
            dictionary,
            rng,
            next_id: 1,
        }
    }

    pub fn obstacle_from_symbol(&self, symbol: char) -> Option<Obstacle> {
        Obstacle::from_symbol(symbol)
    }

    /// Actor kind a symbol spawns, if the dictionary knows it
    pub fn actor_from_symbol(&self, symbol: char) -> Option<ActorKind> {
        self.dictionary.get(symbol)
    }

    pub fn create_grid<S: AsRef<str>>(&self, plan: &[S]) -> Grid {
        plan.iter()
            .map(|row| {
                row.as_ref()
                    .chars()
                    .map(|symbol| self.obstacle_from_symbol(symbol))
                    .collect()
            })
            .collect()
    }

    /// Actors in row-major encounter order, spawned at their raw cell coordinates
    pub fn create_actors<S: AsRef<str>>(&mut self, plan: &[S]) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (y, row) in plan.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                let Some(kind) = self.actor_from_symbol(symbol) else {
                    continue;
                };
                let id = ActorId(self.next_id);
                self.next_id += 1;
                let cell = Vector::new(x as f64, y as f64);
                actors.push(Actor::spawn(kind, id, cell, &mut self.rng));
            }
        }
        actors
    }

    pub fn parse<S: AsRef<str>>(&mut self, plan: &[S]) -> Level {
        let grid = self.create_grid(plan);
        let actors = self.create_actors(plan);
        let level = Level::new(grid, actors);
        log::debug!(
            "Parsed level {}x{} with {} actors",
            level.width(),
            level.height(),
            level.actors().len()
        );
        level
    }
}
