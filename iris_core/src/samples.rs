//! # Sample Profiles
//!
//! Canonical measurements for each species, used by the "load sample"
//! buttons for quick manual testing. Read-only.

use serde::Serialize;

use crate::measurement::MeasurementInput;
use crate::species::Species;

/// A named preset of the four measurement values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleProfile {
    pub species: Species,
    pub input: MeasurementInput,
}

/// One profile per species, in [`Species::ALL`] order
pub const SAMPLE_PROFILES: [SampleProfile; 3] = [
    SampleProfile {
        species: Species::Setosa,
        input: MeasurementInput {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
        },
    },
    SampleProfile {
        species: Species::Versicolor,
        input: MeasurementInput {
            sepal_length: 6.0,
            sepal_width: 2.8,
            petal_length: 4.5,
            petal_width: 1.3,
        },
    },
    SampleProfile {
        species: Species::Virginica,
        input: MeasurementInput {
            sepal_length: 6.9,
            sepal_width: 3.1,
            petal_length: 5.4,
            petal_width: 2.1,
        },
    },
];

/// Sample profile for a species
pub fn sample_for(species: Species) -> &'static SampleProfile {
    match species {
        Species::Setosa => &SAMPLE_PROFILES[0],
        Species::Versicolor => &SAMPLE_PROFILES[1],
        Species::Virginica => &SAMPLE_PROFILES[2],
    }
}

/// Sample profile by species key; `None` for unknown keys
pub fn sample_by_key(key: &str) -> Option<&'static SampleProfile> {
    Species::from_str_flexible(key).ok().map(sample_for)
}
