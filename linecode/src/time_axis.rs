use std::fmt;

use crate::scheme::Scheme;

/// A tick position counted in half bit periods, so the half-bit steps of
/// Manchester-style schemes stay exact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick {
    half_units: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeAxis {
    ticks: Vec<Tick>,
}

pub fn build_axis(scheme: Scheme, level_count: usize) -> TimeAxis {
    let step = 2 / scheme.levels_per_bit();
    let ticks = (0..level_count)
        .map(|i| Tick::from_half_units(i * step))
        .collect();
    TimeAxis { ticks }
}

impl Tick {
    pub fn from_half_units(half_units: usize) -> Self {
        Self { half_units }
    }

    pub fn half_units(self) -> usize {
        self.half_units
    }

    pub fn value(self) -> f64 {
        self.half_units as f64 / 2.0
    }

    /// Bit period this tick falls in.
    pub fn bit_index(self) -> usize {
        self.half_units / 2
    }

    pub fn is_integer(self) -> bool {
        self.half_units % 2 == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.half_units / 2)
        } else {
            write!(f, "{}.5", self.half_units / 2)
        }
    }
}

impl TimeAxis {
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value()).collect()
    }

    pub fn spacing(&self) -> Option<f64> {
        match self.ticks.as_slice() {
            [first, second, ..] => Some(second.value() - first.value()),
            _ => None,
        }
    }
}
