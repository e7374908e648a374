//! Immutable 2D vector used for positions, sizes and velocities
//!
//! Fields are private: every update builds a new `Vector`, nothing is patched in place.

use std::ops::{Add, Mul};

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point or displacement in grid units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Vector(DVec2);

impl Vector {
    pub const ZERO: Self = Self(DVec2::ZERO);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        Self(self.0 + other.0)
    }

    /// Component-wise scale
    #[inline]
    pub fn times(self, factor: f64) -> Vector {
        Self(self.0 * factor)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.times(rhs)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.x(), v.y())
    }
}
