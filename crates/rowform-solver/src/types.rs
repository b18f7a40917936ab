//! Shared protocol types for variable declaration and objectives.

/// Variable domain kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarKind {
    Continuous,
    Integer,
    Binary,
}

impl VarKind {
    pub fn is_integral(self) -> bool {
        matches!(self, VarKind::Integer | VarKind::Binary)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Continuous => "continuous",
            VarKind::Integer => "integer",
            VarKind::Binary => "binary",
        }
    }
}

/// A decision variable: bounds plus domain kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VarSpec {
    pub lower: f64,
    pub upper: f64,
    pub kind: VarKind,
}

impl VarSpec {
    /// Continuous variable with the given bounds.
    pub fn continuous(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            kind: VarKind::Continuous,
        }
    }

    /// Integer variable with the given bounds.
    pub fn integer(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            kind: VarKind::Integer,
        }
    }

    /// Binary variable. Engines pin the domain to {0, 1} regardless of the
    /// stored bounds.
    pub fn binary() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
            kind: VarKind::Binary,
        }
    }
}

/// Objective direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Map the wire encoding (1 = minimize, -1 = maximize). Any other value
    /// yields `None`; callers bridging the integer protocol keep their
    /// previous direction by not acting on it.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Direction::Minimize),
            -1 => Some(Direction::Maximize),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Minimize => "minimize",
            Direction::Maximize => "maximize",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, VarKind, VarSpec};

    #[test]
    fn binary_spec_has_unit_bounds() {
        let spec = VarSpec::binary();
        assert_eq!(spec.lower, 0.0);
        assert_eq!(spec.upper, 1.0);
        assert_eq!(spec.kind, VarKind::Binary);
    }

    #[test]
    fn integral_kinds() {
        assert!(VarKind::Integer.is_integral());
        assert!(VarKind::Binary.is_integral());
        assert!(!VarKind::Continuous.is_integral());
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(VarKind::Continuous.as_str(), "continuous");
        assert_eq!(VarKind::Integer.as_str(), "integer");
        assert_eq!(VarKind::Binary.as_str(), "binary");
    }

    #[test]
    fn direction_from_raw_maps_wire_values() {
        assert_eq!(Direction::from_raw(1), Some(Direction::Minimize));
        assert_eq!(Direction::from_raw(-1), Some(Direction::Maximize));
        assert_eq!(Direction::from_raw(0), None);
        assert_eq!(Direction::from_raw(2), None);
    }
}
