//! # Template Rows — Central and Stochastic Variants
//!
//! Materializes an enumerated [`RowKey`] into a template output row: the
//! shape a data-entry template exports before any values are filled in.
//! Every value field starts absent. Absence must survive serialization
//! verbatim (`null`, never `0`), so the serde derives keep `Option` fields
//! explicit rather than skipping them.
//!
//! Central rows carry one deterministic estimate per cell. Stochastic rows
//! additionally carry a run identifier, absent at template-generation time;
//! a specific run is associated later by an external merge step.

use std::collections::BTreeMap;

use burdex_core::{CountryId, Expectations};
use serde::{Deserialize, Serialize};

use crate::enumerate::{expected_rows, RowKey};

/// A template row for a central (deterministic) burden estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedCentralRow {
    /// Disease the estimate concerns.
    pub disease: String,
    /// Calendar year of the cell.
    pub year: i32,
    /// Age of the cell.
    pub age: i32,
    /// Country code.
    pub country: CountryId,
    /// Human-readable country name.
    pub country_name: String,
    /// Cohort size; absent until supplied by the submitter.
    pub cohort_size: Option<f64>,
    /// One entry per contract outcome name; every value absent.
    pub outcomes: BTreeMap<String, Option<f64>>,
}

/// A template row for one execution of a stochastic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedStochasticRow {
    /// Disease the estimate concerns.
    pub disease: String,
    /// Run identifier; absent until an external merge step associates one.
    pub run_id: Option<u32>,
    /// Calendar year of the cell.
    pub year: i32,
    /// Age of the cell.
    pub age: i32,
    /// Country code.
    pub country: CountryId,
    /// Human-readable country name.
    pub country_name: String,
    /// Cohort size; absent until supplied by the submitter.
    pub cohort_size: Option<f64>,
    /// One entry per contract outcome name; every value absent.
    pub outcomes: BTreeMap<String, Option<f64>>,
}

impl ExpectedCentralRow {
    /// Materialize a central template row for one grid cell.
    pub fn from_key(disease: &str, key: &RowKey<'_>, expectations: &Expectations) -> Self {
        Self {
            disease: disease.to_string(),
            year: key.year,
            age: key.age,
            country: key.country.id.clone(),
            country_name: key.country.name.clone(),
            cohort_size: None,
            outcomes: empty_outcomes(expectations),
        }
    }
}

impl ExpectedStochasticRow {
    /// Materialize a stochastic template row for one grid cell.
    pub fn from_key(disease: &str, key: &RowKey<'_>, expectations: &Expectations) -> Self {
        Self {
            disease: disease.to_string(),
            run_id: None,
            year: key.year,
            age: key.age,
            country: key.country.id.clone(),
            country_name: key.country.name.clone(),
            cohort_size: None,
            outcomes: empty_outcomes(expectations),
        }
    }
}

/// Lazily materialize every expected central row for a disease.
pub fn expected_central_rows<'a>(
    disease: &'a str,
    expectations: &'a Expectations,
) -> impl Iterator<Item = ExpectedCentralRow> + 'a {
    expected_rows(expectations).map(move |key| ExpectedCentralRow::from_key(disease, &key, expectations))
}

/// Lazily materialize every expected stochastic row for a disease.
pub fn expected_stochastic_rows<'a>(
    disease: &'a str,
    expectations: &'a Expectations,
) -> impl Iterator<Item = ExpectedStochasticRow> + 'a {
    expected_rows(expectations)
        .map(move |key| ExpectedStochasticRow::from_key(disease, &key, expectations))
}

fn empty_outcomes(expectations: &Expectations) -> BTreeMap<String, Option<f64>> {
    expectations
        .outcomes()
        .iter()
        .map(|name| (name.clone(), None))
        .collect()
}
