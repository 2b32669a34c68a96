//! Fare zones crossed by a planned journey.
//!
//! Each stop the journey passes through contributes zone numbers. A stop
//! inside a single zone contributes that zone. A boundary stop ("3/4")
//! contributes only the side(s) it shares with an adjacent stop in the
//! journey sequence, so crossing a boundary stop at the edge of a journey
//! never drags in the zone on the far side. A boundary stop whose
//! neighbours share neither side contributes both sides.

use std::collections::BTreeSet;

use crate::domain::{FareZone, PlannedJourney, Stop};

/// Computes the ascending, deduplicated list of fare zones a journey
/// touches.
pub struct FareZoneResolver;

impl FareZoneResolver {
    /// Zones crossed by the journey, ascending and deduplicated.
    pub fn zones_for_journey(journey: &PlannedJourney) -> Vec<u8> {
        let sequence = journey.stop_sequence();
        let mut zones: BTreeSet<u8> = BTreeSet::new();

        for (idx, stop) in sequence.iter().enumerate() {
            match stop.zone {
                FareZone::Single(zone) => {
                    zones.insert(zone);
                }
                FareZone::Boundary(_, _) => {
                    let previous = idx.checked_sub(1).map(|i| sequence[i]);
                    let next = sequence.get(idx + 1).copied();
                    for zone in boundary_sides(stop, previous, next) {
                        zones.insert(zone);
                    }
                }
            }
        }

        zones.into_iter().collect()
    }
}

/// The sides of a boundary stop that the journey actually touches: those
/// shared with a neighbouring stop's zone label.
fn boundary_sides(stop: &Stop, previous: Option<&Stop>, next: Option<&Stop>) -> Vec<u8> {
    let shared: Vec<u8> = stop
        .zone
        .sides()
        .into_iter()
        .filter(|&side| {
            previous.is_some_and(|p| p.zone.touches(side))
                || next.is_some_and(|n| n.zone.touches(side))
        })
        .collect();

    if shared.is_empty() {
        stop.zone.sides()
    } else {
        shared
    }
}
