use std::ops::{Add, Div, Mul};

use approx::AbsDiffEq;
use ordered_float::OrderedFloat;

/// Distance along a connection, in kilometers.
/// Wraps [`OrderedFloat`] so distances are totally ordered and can be
/// used as keys in heaps and maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Kilometers(OrderedFloat<f64>);

impl Kilometers {
    pub const fn from_km(km: f64) -> Self {
        Self(OrderedFloat(km))
    }

    pub const fn km(&self) -> f64 {
        self.0.0
    }
}

impl Add for Kilometers {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AbsDiffEq for Kilometers {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.0.abs_diff_eq(&other.0.0, epsilon)
    }
}

/// Travel time, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hours(OrderedFloat<f64>);

impl Hours {
    pub const ZERO: Self = Self::from_hours(0.0);
    pub const INFINITY: Self = Self::from_hours(f64::INFINITY);

    pub const fn from_hours(hours: f64) -> Self {
        Self(OrderedFloat(hours))
    }

    pub const fn hours(&self) -> f64 {
        self.0.0
    }
}

impl Add for Hours {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AbsDiffEq for Hours {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.0.0.abs_diff_eq(&other.0.0, epsilon)
    }
}

/// Average travel speed used to convert distances into travel times,
/// in kilometers per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(OrderedFloat<f64>);

impl Speed {
    pub const fn from_kmh(kmh: f64) -> Self {
        Self(OrderedFloat(kmh))
    }

    pub const fn kmh(&self) -> f64 {
        self.0.0
    }
}

/// Dividing a distance by a speed yields the travel time at that speed.
impl Div<Speed> for Kilometers {
    type Output = Hours;

    fn div(self, rhs: Speed) -> Hours {
        Hours(self.0 / rhs.0)
    }
}

/// Multiplying a travel time by a speed yields the distance covered.
impl Mul<Speed> for Hours {
    type Output = Kilometers;

    fn mul(self, rhs: Speed) -> Kilometers {
        Kilometers(self.0 * rhs.0)
    }
}

/// A single undirected connection between two named locations, as read
/// from a dataset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub source: String,
    pub distance: Kilometers,
    pub destination: String,
}
