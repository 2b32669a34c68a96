//! Stop identity types.

use std::fmt;

use super::zone::FareZone;

/// Error returned when parsing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A valid 3-letter tram stop code (TLAREF style).
///
/// Stop codes are always 3 uppercase ASCII letters. This type guarantees
/// that any `StopCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use tram_server::domain::StopCode;
///
/// let alt = StopCode::parse("ALT").unwrap();
/// assert_eq!(alt.as_str(), "ALT");
///
/// // Lowercase is rejected
/// assert!(StopCode::parse("alt").is_err());
///
/// // Wrong length is rejected
/// assert!(StopCode::parse("AL").is_err());
/// assert!(StopCode::parse("ALTR").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopCode([u8; 3]);

impl StopCode {
    /// Parse a stop code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStopCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStopCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(StopCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a stop code, uppercasing lowercase input first.
    ///
    /// Useful for user-supplied identifiers ("alt" → ALT).
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStopCode> {
        Self::parse(&s.to_ascii_uppercase())
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.as_str())
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tram stop.
///
/// Structural identity in maps and sets is the stop code; the name-or-code
/// OR-match in [`Stop::is_same_stop`] exists because route fixtures and the
/// live feed disagree about which identifier they carry, and is a lookup
/// convenience only.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// 3-letter stop code.
    pub code: StopCode,

    /// Display name, e.g. "Altrincham".
    pub name: String,

    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,

    /// Fare zone, possibly a boundary pair.
    pub zone: FareZone,
}

impl Stop {
    /// Two stops refer to the same station if their names match or their
    /// codes match.
    pub fn is_same_stop(&self, other: &Stop) -> bool {
        self.code == other.code || self.name == other.name
    }

    /// Check whether a free-text identifier refers to this stop.
    ///
    /// Matches the exact display name, or the stop code after uppercasing.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        if self.name == identifier {
            return true;
        }
        StopCode::parse_normalized(identifier).is_ok_and(|code| code == self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(code: &str, name: &str) -> Stop {
        Stop {
            code: StopCode::parse(code).unwrap(),
            name: name.to_string(),
            latitude: 53.4,
            longitude: -2.3,
            zone: FareZone::Single(1),
        }
    }

    #[test]
    fn parse_valid_code() {
        assert!(StopCode::parse("ALT").is_ok());
        assert!(StopCode::parse("PIC").is_ok());
        assert!(StopCode::parse("AAA").is_ok());
        assert!(StopCode::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StopCode::parse("alt").is_err());
        assert!(StopCode::parse("Alt").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StopCode::parse("").is_err());
        assert!(StopCode::parse("A").is_err());
        assert!(StopCode::parse("AL").is_err());
        assert!(StopCode::parse("ALTR").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(StopCode::parse("A1T").is_err());
        assert!(StopCode::parse("A-T").is_err());
        assert!(StopCode::parse("A T").is_err());
    }

    #[test]
    fn parse_normalized_uppercases() {
        assert_eq!(
            StopCode::parse_normalized("alt").unwrap(),
            StopCode::parse("ALT").unwrap()
        );
    }

    #[test]
    fn display_and_debug() {
        let code = StopCode::parse("PIC").unwrap();
        assert_eq!(format!("{}", code), "PIC");
        assert_eq!(format!("{:?}", code), "StopCode(PIC)");
    }

    #[test]
    fn same_stop_by_code() {
        let a = stop("ALT", "Altrincham");
        let b = stop("ALT", "Altrincham Interchange");
        assert!(a.is_same_stop(&b));
    }

    #[test]
    fn same_stop_by_name() {
        let a = stop("ALT", "Altrincham");
        let b = stop("ALX", "Altrincham");
        assert!(a.is_same_stop(&b));
    }

    #[test]
    fn different_stops() {
        let a = stop("ALT", "Altrincham");
        let b = stop("PIC", "Piccadilly");
        assert!(!a.is_same_stop(&b));
    }

    #[test]
    fn matches_identifier_by_name_or_code() {
        let s = stop("ALT", "Altrincham");
        assert!(s.matches_identifier("Altrincham"));
        assert!(s.matches_identifier("ALT"));
        assert!(s.matches_identifier("alt"));
        assert!(!s.matches_identifier("altrincham"));
        assert!(!s.matches_identifier("Piccadilly"));
    }
}
