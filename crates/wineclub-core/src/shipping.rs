//! Shipping zone resolution.
//!
//! Maps a raw postal-code string to a shipping zone and cost. The zone table
//! is immutable, constructed up front, and injected into the resolver calls
//! via [`ZoneTable`]; [`ZoneTable::default`] carries the production reference
//! data, and tests can supply an alternate table.

use serde::{Deserialize, Serialize};

/// An inclusive numeric postal-code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRange {
    /// Lowest postal code in the range.
    pub min: u32,

    /// Highest postal code in the range.
    pub max: u32,
}

impl PostalRange {
    /// Create a new inclusive range.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Check whether a postal code falls inside this range.
    #[must_use]
    pub const fn contains(&self, code: u32) -> bool {
        code >= self.min && code <= self.max
    }
}

/// A named geographic pricing tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingZone {
    /// Zone name (e.g. "Capital Federal").
    pub name: String,

    /// Ordered postal-code ranges covered by this zone.
    pub ranges: Vec<PostalRange>,

    /// Flat shipping cost in centavos.
    pub cost_cents: i64,
}

impl ShippingZone {
    /// Create a new zone.
    #[must_use]
    pub fn new(name: impl Into<String>, ranges: Vec<PostalRange>, cost_cents: i64) -> Self {
        Self {
            name: name.into(),
            ranges,
            cost_cents,
        }
    }

    /// Check whether a postal code falls inside any of this zone's ranges.
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        self.ranges.iter().any(|range| range.contains(code))
    }
}

/// An ordered shipping zone table. Resolution is first-match-wins in table
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTable {
    zones: Vec<ShippingZone>,
}

impl Default for ZoneTable {
    /// The production zone table.
    ///
    /// The Gran Buenos Aires ranges overlap each other; the redundancy and
    /// the sub-order are reproduced verbatim from the reference data.
    /// Deduplicating could change which zone wins if the table order were
    /// ever altered, so they stay as-is.
    fn default() -> Self {
        Self::new(vec![
            ShippingZone::new("Capital Federal", vec![PostalRange::new(1000, 1499)], 0),
            ShippingZone::new(
                "Gran Buenos Aires",
                vec![
                    PostalRange::new(1500, 1999),
                    PostalRange::new(1600, 1899),
                    PostalRange::new(1800, 1899),
                    PostalRange::new(2000, 2999),
                ],
                3_000_000,
            ),
            ShippingZone::new(
                "Interior del país",
                vec![PostalRange::new(3000, 9999)],
                5_500_000,
            ),
        ])
    }
}

impl ZoneTable {
    /// Create a table from an ordered list of zones.
    #[must_use]
    pub fn new(zones: Vec<ShippingZone>) -> Self {
        Self { zones }
    }

    /// The zones, in resolution order.
    #[must_use]
    pub fn zones(&self) -> &[ShippingZone] {
        &self.zones
    }

    /// Resolve a raw postal-code string to its zone.
    ///
    /// Returns `None` for empty/whitespace input, input that does not parse
    /// as an integer, and codes no zone covers. Callers cannot distinguish
    /// the three causes from this call alone; that is the accepted contract.
    #[must_use]
    pub fn resolve(&self, postal_code: &str) -> Option<&ShippingZone> {
        let code = parse_postal_code(postal_code)?;
        self.zones.iter().find(|zone| zone.contains(code))
    }

    /// Compute the shipping cost for a postal code, in centavos.
    ///
    /// Unmatched, empty, or unparseable postal codes fall back to
    /// `base_cost_cents` unchanged; bad input here is not an error.
    #[must_use]
    pub fn calculate_shipping(&self, postal_code: &str, base_cost_cents: i64) -> i64 {
        self.resolve(postal_code)
            .map_or(base_cost_cents, |zone| zone.cost_cents)
    }

    /// Check whether a postal code resolves to the named zone.
    #[must_use]
    pub fn is_zone(&self, postal_code: &str, zone_name: &str) -> bool {
        self.resolve(postal_code)
            .is_some_and(|zone| zone.name == zone_name)
    }
}

fn parse_postal_code(postal_code: &str) -> Option<u32> {
    let trimmed = postal_code.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
