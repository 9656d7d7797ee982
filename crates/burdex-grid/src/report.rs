//! # Gap Report — Human-Facing Completeness Messages
//!
//! Condenses a [`CoverageLookup`] into one gap entry per incomplete
//! country: the first age that still has missing years and the first
//! missing year at that age. The reporting surface renders these as
//! messages like "missing data for country AFG, age 5, starting at year
//! 2010".
//!
//! Entries are ordered by country id ascending, so the same lookup always
//! produces the same report.

use burdex_core::CountryId;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageLookup;

/// The leading gap for one incomplete country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// The incomplete country.
    pub country: CountryId,
    /// The smallest age with missing years.
    pub age: i32,
    /// The smallest missing year at that age.
    pub first_missing_year: i32,
}

impl std::fmt::Display for Gap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "missing data for country {}, age {}, starting at year {}",
            self.country, self.age, self.first_missing_year
        )
    }
}

/// All leading gaps in a coverage lookup, one per incomplete country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    gaps: Vec<Gap>,
}

impl GapReport {
    /// Derive the report from a lookup.
    ///
    /// Countries with nothing missing contribute no entry. The first-age
    /// and first-year queries cannot fail here because each country is
    /// checked for missing rows before it is queried.
    pub fn from_lookup(lookup: &CoverageLookup) -> Self {
        let mut gaps = Vec::new();
        for (country, ages) in lookup.iter() {
            if !ages.has_missing() {
                continue;
            }
            let Ok(age) = ages.first_age_with_missing_rows() else {
                continue;
            };
            let Some(years) = ages.age(age) else {
                continue;
            };
            let Ok(first_missing_year) = years.first_missing_year() else {
                continue;
            };
            gaps.push(Gap {
                country: country.clone(),
                age,
                first_missing_year,
            });
        }
        Self { gaps }
    }

    /// Whether the lookup had no gaps at all.
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    /// The gap entries, ordered by country id ascending.
    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::expected_rows;
    use burdex_core::{AgeSpan, CohortRestriction, Country, CountryId, Expectations, YearSpan};

    fn contract() -> Expectations {
        Expectations::new(
            1,
            "test",
            YearSpan::new(2010, 2012).unwrap(),
            AgeSpan::new(0, 1).unwrap(),
            CohortRestriction::unrestricted(),
            vec![
                Country::new("ZWE", "Zimbabwe").unwrap(),
                Country::new("AFG", "Afghanistan").unwrap(),
            ],
            vec!["deaths".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_lookup_reports_every_country() {
        let c = contract();
        let lookup = CoverageLookup::build(&c);
        let report = GapReport::from_lookup(&lookup);
        assert!(!report.is_complete());
        assert_eq!(report.gaps().len(), 2);
        // Ordered by country id, not by contract declaration order.
        assert_eq!(report.gaps()[0].country.as_str(), "AFG");
        assert_eq!(report.gaps()[1].country.as_str(), "ZWE");
    }

    #[test]
    fn test_complete_lookup_reports_nothing() {
        let c = contract();
        let mut lookup = CoverageLookup::build(&c);
        for key in expected_rows(&c) {
            lookup
                .mark_present(&key.country.id, key.age, key.year)
                .unwrap();
        }
        let report = GapReport::from_lookup(&lookup);
        assert!(report.is_complete());
        assert!(report.gaps().is_empty());
    }

    #[test]
    fn test_gap_points_at_first_missing_cell() {
        let c = contract();
        let mut lookup = CoverageLookup::build(&c);
        let afg = CountryId::new("AFG").unwrap();
        let zwe = CountryId::new("ZWE").unwrap();
        // Complete ZWE entirely; complete AFG age 0 except 2012.
        for key in expected_rows(&c) {
            if key.country.id == zwe {
                lookup.mark_present(&zwe, key.age, key.year).unwrap();
            }
        }
        lookup.mark_present(&afg, 0, 2010).unwrap();
        lookup.mark_present(&afg, 0, 2011).unwrap();

        let report = GapReport::from_lookup(&lookup);
        assert_eq!(report.gaps().len(), 1);
        let gap = &report.gaps()[0];
        assert_eq!(gap.country, afg);
        assert_eq!(gap.age, 0);
        assert_eq!(gap.first_missing_year, 2012);
    }

    #[test]
    fn test_gap_message_rendering() {
        let gap = Gap {
            country: CountryId::new("AFG").unwrap(),
            age: 5,
            first_missing_year: 2010,
        };
        assert_eq!(
            gap.to_string(),
            "missing data for country AFG, age 5, starting at year 2010"
        );
    }
}
