//! Destination text normalization for the live feed.
//!
//! The feed advertises destinations in free-form "via" phrasing, e.g.
//! "Bury via Market Street" or "Eccles Via MediaCityUK". Matching against
//! route stop names needs the text before the "via", so this lives as a
//! standalone function with its own tests; punctuation and casing drift
//! upstream is a recurring source of silent matching failures.

/// Strip any "… via X" suffix, leaving the displayed destination itself.
///
/// The match on "via" is ASCII case-insensitive and word-delimited, so
/// names that merely contain the letters ("Viaduct Street") are left
/// alone.
pub fn normalize_destination(raw: &str) -> String {
    let lower = raw.to_ascii_lowercase();

    let cut = if let Some(idx) = lower.find(" via ") {
        idx
    } else if let Some(stripped) = lower.strip_suffix(" via") {
        stripped.len()
    } else {
        raw.len()
    };

    raw[..cut].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_via_suffix() {
        assert_eq!(normalize_destination("Bury via Market Street"), "Bury");
    }

    #[test]
    fn via_is_case_insensitive() {
        assert_eq!(normalize_destination("Eccles Via MediaCityUK"), "Eccles");
        assert_eq!(normalize_destination("Eccles VIA MediaCityUK"), "Eccles");
    }

    #[test]
    fn no_via_is_unchanged() {
        assert_eq!(normalize_destination("Piccadilly"), "Piccadilly");
        assert_eq!(
            normalize_destination("Ashton-Under-Lyne"),
            "Ashton-Under-Lyne"
        );
    }

    #[test]
    fn trailing_via_with_nothing_after() {
        assert_eq!(normalize_destination("Bury via"), "Bury");
    }

    #[test]
    fn via_inside_a_word_is_not_a_suffix() {
        assert_eq!(normalize_destination("Viaduct Street"), "Viaduct Street");
        assert_eq!(normalize_destination("Grand Viaduct"), "Grand Viaduct");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_destination("  Bury via Market Street  "), "Bury");
        assert_eq!(normalize_destination(" Piccadilly "), "Piccadilly");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_destination(""), "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Appending a "via" clause never changes the normalized result.
        #[test]
        fn via_clause_is_invisible(name in "[A-Z][a-z]{1,12}", via in "[A-Z][a-z]{1,12}") {
            let with_via = format!("{name} via {via}");
            prop_assert_eq!(normalize_destination(&with_via), normalize_destination(&name));
        }

        /// Normalization is idempotent.
        #[test]
        fn idempotent(raw in "[A-Za-z ]{0,30}") {
            let once = normalize_destination(&raw);
            prop_assert_eq!(normalize_destination(&once), once.clone());
        }
    }
}
