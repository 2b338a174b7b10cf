//! # Measurements
//!
//! The four flower measurements sent to the prediction endpoint, and the raw
//! form text they are parsed from.
//!
//! ## Example
//!
//! ```rust
//! use iris_core::measurement::{MeasurementField, RawMeasurements};
//!
//! let mut raw = RawMeasurements::default();
//! raw.set(MeasurementField::SepalLength, "5.1");
//! raw.set(MeasurementField::SepalWidth, "3.5");
//! raw.set(MeasurementField::PetalLength, "1.4");
//! raw.set(MeasurementField::PetalWidth, "0.2");
//!
//! let input = raw.parse().unwrap();
//! assert_eq!(input.petal_width, 0.2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{IrisError, IrisResult};

/// Measurement payload posted to the prediction endpoint (centimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl MeasurementInput {
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        MeasurementInput {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Value of a single field
    pub fn get(&self, field: MeasurementField) -> f64 {
        match field {
            MeasurementField::SepalLength => self.sepal_length,
            MeasurementField::SepalWidth => self.sepal_width,
            MeasurementField::PetalLength => self.petal_length,
            MeasurementField::PetalWidth => self.petal_width,
        }
    }

    /// Values in form order
    pub fn as_array(&self) -> [f64; 4] {
        [self.sepal_length, self.sepal_width, self.petal_length, self.petal_width]
    }
}

/// One of the four measurement fields on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl MeasurementField {
    /// All fields in form order
    pub const ALL: [MeasurementField; 4] = [
        MeasurementField::SepalLength,
        MeasurementField::SepalWidth,
        MeasurementField::PetalLength,
        MeasurementField::PetalWidth,
    ];

    /// JSON key on the wire
    pub fn key(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "sepal_length",
            MeasurementField::SepalWidth => "sepal_width",
            MeasurementField::PetalLength => "petal_length",
            MeasurementField::PetalWidth => "petal_width",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementField::SepalLength => "Sepal Length",
            MeasurementField::SepalWidth => "Sepal Width",
            MeasurementField::PetalLength => "Petal Length",
            MeasurementField::PetalWidth => "Petal Width",
        }
    }

    pub fn unit(&self) -> &'static str {
        "cm"
    }
}

impl std::fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw text of the four form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMeasurements {
    pub sepal_length: String,
    pub sepal_width: String,
    pub petal_length: String,
    pub petal_width: String,
}

impl RawMeasurements {
    /// Text of a single field
    pub fn get(&self, field: MeasurementField) -> &str {
        match field {
            MeasurementField::SepalLength => &self.sepal_length,
            MeasurementField::SepalWidth => &self.sepal_width,
            MeasurementField::PetalLength => &self.petal_length,
            MeasurementField::PetalWidth => &self.petal_width,
        }
    }

    /// Replace the text of a single field
    pub fn set(&mut self, field: MeasurementField, value: impl Into<String>) {
        let slot = match field {
            MeasurementField::SepalLength => &mut self.sepal_length,
            MeasurementField::SepalWidth => &mut self.sepal_width,
            MeasurementField::PetalLength => &mut self.petal_length,
            MeasurementField::PetalWidth => &mut self.petal_width,
        };
        *slot = value.into();
    }

    /// Overwrite all four fields from a measurement
    pub fn fill_from(&mut self, input: &MeasurementInput) {
        for field in MeasurementField::ALL {
            self.set(field, input.get(field).to_string());
        }
    }

    /// Parse all four fields.
    ///
    /// The first field (in form order) that is empty, non-numeric, NaN or
    /// infinite is reported as [`IrisError::InvalidInput`].
    pub fn parse(&self) -> IrisResult<MeasurementInput> {
        Ok(MeasurementInput {
            sepal_length: parse_field(MeasurementField::SepalLength, &self.sepal_length)?,
            sepal_width: parse_field(MeasurementField::SepalWidth, &self.sepal_width)?,
            petal_length: parse_field(MeasurementField::PetalLength, &self.petal_length)?,
            petal_width: parse_field(MeasurementField::PetalWidth, &self.petal_width)?,
        })
    }
}

impl From<&MeasurementInput> for RawMeasurements {
    fn from(input: &MeasurementInput) -> Self {
        let mut raw = RawMeasurements::default();
        raw.fill_from(input);
        raw
    }
}

/// Parse one field's text into a finite number
pub fn parse_field(field: MeasurementField, text: &str) -> IrisResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(IrisError::invalid_input(field.key(), text, "Value is required"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| IrisError::invalid_input(field.key(), text, "Value must be a number"))?;

    if !value.is_finite() {
        return Err(IrisError::invalid_input(field.key(), text, "Value must be a finite number"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: [&str; 4]) -> RawMeasurements {
        let mut raw = RawMeasurements::default();
        for (field, value) in MeasurementField::ALL.iter().zip(values) {
            raw.set(*field, value);
        }
        raw
    }

    #[test]
    fn test_parse_valid_fields() {
        let input = raw(["5.1", " 3.5 ", "1.4", "0.2"]).parse().unwrap();
        assert_eq!(input, MeasurementInput::new(5.1, 3.5, 1.4, 0.2));
    }

    #[test]
    fn test_parse_accepts_any_finite_range() {
        let input = raw(["-1", "0", "1e3", "250.75"]).parse().unwrap();
        assert_eq!(input.as_array(), [-1.0, 0.0, 1000.0, 250.75]);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = raw(["5.1", "wide", "1.4", "0.2"]).parse().unwrap_err();
        match err {
            IrisError::InvalidInput { field, value, .. } => {
                assert_eq!(field, "sepal_width");
                assert_eq!(value, "wide");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_and_non_finite() {
        assert!(raw(["", "3.5", "1.4", "0.2"]).parse().is_err());
        assert!(raw(["5.1", "3.5", "NaN", "0.2"]).parse().is_err());
        assert!(raw(["5.1", "3.5", "1.4", "inf"]).parse().is_err());
    }

    #[test]
    fn test_wire_format_uses_snake_case_keys() {
        let input = MeasurementInput::new(6.0, 2.8, 4.5, 1.3);
        let json: serde_json::Value = serde_json::to_value(input).unwrap();
        for field in MeasurementField::ALL {
            assert_eq!(json[field.key()].as_f64(), Some(input.get(field)));
        }
        assert_eq!(json.as_object().map(|o| o.len()), Some(4));
    }

    #[test]
    fn test_fill_from_reparses_to_same_values() {
        let input = MeasurementInput::new(6.9, 3.1, 5.4, 2.1);
        let raw = RawMeasurements::from(&input);
        assert_eq!(raw.sepal_length, "6.9");
        assert_eq!(raw.parse().unwrap(), input);
    }
}
