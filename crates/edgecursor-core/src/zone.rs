//! Horizontal viewport zones.

/// Default fraction of the viewport width treated as an edge zone on each side.
pub const DEFAULT_EDGE_FRACTION: f32 = 0.25;

/// Horizontal region of the viewport the pointer occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Zone {
    Left,
    #[default]
    Center,
    Right,
}

impl Zone {
    /// The arrow side associated with this zone, `None` for [`Zone::Center`].
    pub fn side(self) -> Option<Side> {
        match self {
            Zone::Left => Some(Side::Left),
            Zone::Center => None,
            Zone::Right => Some(Side::Right),
        }
    }
}

/// One of the two directional arrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn zone(self) -> Zone {
        match self {
            Side::Left => Zone::Left,
            Side::Right => Zone::Right,
        }
    }

    /// Sign of the arrow's resting-to-hidden travel.
    ///
    /// The left arrow sits right of its rest position while hidden, the right
    /// arrow sits left of it.
    pub fn travel_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Classifies horizontal coordinates against a fractional edge threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneClassifier {
    edge_fraction: f32,
}

impl ZoneClassifier {
    /// Creates a classifier. The fraction is clamped to `[0.0, 0.5]` so the
    /// two edge bands can never overlap; non-finite values fall back to
    /// [`DEFAULT_EDGE_FRACTION`].
    pub fn new(edge_fraction: f32) -> Self {
        let edge_fraction = if edge_fraction.is_finite() {
            edge_fraction.clamp(0.0, 0.5)
        } else {
            DEFAULT_EDGE_FRACTION
        };
        Self { edge_fraction }
    }

    pub fn edge_fraction(&self) -> f32 {
        self.edge_fraction
    }

    /// Returns the zone for `x` within a viewport of `viewport_width`.
    ///
    /// A coordinate exactly on a threshold is [`Zone::Center`]. Coordinates
    /// outside `[0, viewport_width]` classify by the same rule, and a NaN
    /// coordinate compares false against both bands and lands in the center.
    pub fn classify(&self, x: f32, viewport_width: f32) -> Zone {
        if x < viewport_width * self.edge_fraction {
            Zone::Left
        } else if x > viewport_width * (1.0 - self.edge_fraction) {
            Zone::Right
        } else {
            Zone::Center
        }
    }
}

impl Default for ZoneClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_FRACTION)
    }
}

/// Classifies `x` using [`DEFAULT_EDGE_FRACTION`].
pub fn classify(x: f32, viewport_width: f32) -> Zone {
    ZoneClassifier::default().classify(x, viewport_width)
}

#[cfg(test)]
#[path = "tests/zone_tests.rs"]
mod tests;
