//! Fare zone labels.
//!
//! Most stops sit inside a single zone ("3"); stops on a zone boundary carry
//! a combined label ("3/4") and count as either side depending on the
//! direction the journey crosses them.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid fare zone label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid fare zone: {reason}")]
pub struct InvalidFareZone {
    reason: &'static str,
}

/// A stop's fare zone label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FareZone {
    /// The stop lies wholly inside one zone.
    Single(u8),

    /// The stop straddles the boundary between two zones, e.g. "3/4".
    /// Stored with the lower zone first.
    Boundary(u8, u8),
}

impl FareZone {
    /// The zone numbers this label can count as.
    pub fn sides(&self) -> Vec<u8> {
        match *self {
            FareZone::Single(z) => vec![z],
            FareZone::Boundary(a, b) => vec![a, b],
        }
    }

    /// Whether this label can count as the given zone.
    pub fn touches(&self, zone: u8) -> bool {
        match *self {
            FareZone::Single(z) => z == zone,
            FareZone::Boundary(a, b) => a == zone || b == zone,
        }
    }

    /// Whether this label shares a zone with another label.
    pub fn shares_side_with(&self, other: &FareZone) -> bool {
        self.sides().iter().any(|z| other.touches(*z))
    }
}

impl FromStr for FareZone {
    type Err = InvalidFareZone;

    /// Parse "4" or "3/4" style labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_zone = |part: &str| {
            part.trim().parse::<u8>().map_err(|_| InvalidFareZone {
                reason: "zone must be a small integer",
            })
        };

        match s.split_once('/') {
            None => Ok(FareZone::Single(parse_zone(s)?)),
            Some((a, b)) => {
                let a = parse_zone(a)?;
                let b = parse_zone(b)?;
                if a == b {
                    return Err(InvalidFareZone {
                        reason: "boundary zones must differ",
                    });
                }
                Ok(FareZone::Boundary(a.min(b), a.max(b)))
            }
        }
    }
}

impl fmt::Display for FareZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FareZone::Single(z) => write!(f, "{z}"),
            FareZone::Boundary(a, b) => write!(f, "{a}/{b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single() {
        assert_eq!("4".parse::<FareZone>().unwrap(), FareZone::Single(4));
        assert_eq!("1".parse::<FareZone>().unwrap(), FareZone::Single(1));
    }

    #[test]
    fn parse_boundary() {
        assert_eq!("3/4".parse::<FareZone>().unwrap(), FareZone::Boundary(3, 4));
    }

    #[test]
    fn parse_boundary_normalizes_order() {
        assert_eq!("4/3".parse::<FareZone>().unwrap(), FareZone::Boundary(3, 4));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<FareZone>().is_err());
        assert!("x".parse::<FareZone>().is_err());
        assert!("3/x".parse::<FareZone>().is_err());
        assert!("3/3".parse::<FareZone>().is_err());
    }

    #[test]
    fn touches() {
        assert!(FareZone::Single(4).touches(4));
        assert!(!FareZone::Single(4).touches(3));
        assert!(FareZone::Boundary(3, 4).touches(3));
        assert!(FareZone::Boundary(3, 4).touches(4));
        assert!(!FareZone::Boundary(3, 4).touches(2));
    }

    #[test]
    fn shares_side() {
        assert!(FareZone::Boundary(3, 4).shares_side_with(&FareZone::Single(4)));
        assert!(FareZone::Boundary(3, 4).shares_side_with(&FareZone::Boundary(2, 3)));
        assert!(!FareZone::Single(1).shares_side_with(&FareZone::Boundary(3, 4)));
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(FareZone::Single(2).to_string(), "2");
        assert_eq!(FareZone::Boundary(3, 4).to_string(), "3/4");
    }
}
