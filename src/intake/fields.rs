use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing form field '{field}'")]
    Missing { field: &'static str },
    #[error("form field '{field}' must be {expected}, got '{value}'")]
    Invalid {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field } | ValidationError::Invalid { field, .. } => field,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl From<HashMap<String, String>> for FormFields {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl FormFields {
    fn raw(&self, field: &'static str) -> Result<&str, ValidationError> {
        self.values
            .get(field)
            .map(String::as_str)
            .ok_or(ValidationError::Missing { field })
    }

    // An empty input is how browsers submit a blank optional field.
    fn raw_optional(&self, field: &'static str) -> Option<&str> {
        self.values
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Free text, taken as submitted.
    pub fn text(&self, field: &'static str) -> Result<String, ValidationError> {
        self.raw(field).map(str::to_string)
    }

    pub fn integer(&self, field: &'static str) -> Result<i32, ValidationError> {
        parse_integer(field, self.raw(field)?)
    }

    pub fn decimal(&self, field: &'static str) -> Result<f64, ValidationError> {
        parse_decimal(field, self.raw(field)?)
    }

    pub fn optional_decimal(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        self.raw_optional(field)
            .map(|value| parse_decimal(field, value))
            .transpose()
    }

    pub fn optional_date(&self, field: &'static str) -> Result<Option<NaiveDate>, ValidationError> {
        self.raw_optional(field)
            .map(|value| {
                NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
                    ValidationError::Invalid {
                        field,
                        expected: "a date (YYYY-MM-DD)",
                        value: value.to_string(),
                    }
                })
            })
            .transpose()
    }

    /// Only the exact text `True` is true. Anything else, including `true`
    /// and the empty string, is false. The field itself must be present.
    pub fn flag(&self, field: &'static str) -> Result<bool, ValidationError> {
        Ok(self.raw(field)? == "True")
    }
}

fn parse_integer(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::Invalid {
            field,
            expected: "an integer",
            value: value.to_string(),
        })
}

// `f64::from_str` also reads `NaN` and `inf`; the store cannot hold either.
fn parse_decimal(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| ValidationError::Invalid {
            field,
            expected: "a number",
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{FormFields, ValidationError};

    #[test]
    fn flag_is_true_only_for_exact_capitalized_true() {
        for (raw, expected) in [
            ("True", true),
            ("true", false),
            ("TRUE", false),
            ("false", false),
            ("yes", false),
            ("1", false),
            ("", false),
            (" True", false),
        ] {
            let fields: FormFields = [("activo", raw)].into_iter().collect();
            assert_eq!(fields.flag("activo"), Ok(expected), "input {raw:?}");
        }
    }

    #[test]
    fn flag_requires_the_field() {
        let fields = FormFields::default();
        assert_eq!(
            fields.flag("activo"),
            Err(ValidationError::Missing { field: "activo" })
        );
    }

    #[test]
    fn integers_tolerate_surrounding_whitespace_only() {
        let fields: FormFields = [("cantidad", " 12 "), ("lead_time", "1.5")]
            .into_iter()
            .collect();

        assert_eq!(fields.integer("cantidad"), Ok(12));
        let err = fields.integer("lead_time").expect_err("1.5 is not an integer");
        assert_eq!(err.field(), "lead_time");
        assert!(err.to_string().contains("must be an integer"));
    }

    #[test]
    fn decimals_accept_integers_and_fractions() {
        let fields: FormFields = [("precio", "9.99"), ("costo", "3"), ("throughput", "abc")]
            .into_iter()
            .collect();

        assert_eq!(fields.decimal("precio"), Ok(9.99));
        assert_eq!(fields.decimal("costo"), Ok(3.0));
        assert!(matches!(
            fields.decimal("throughput"),
            Err(ValidationError::Invalid { field: "throughput", .. })
        ));
    }

    #[test]
    fn decimals_reject_non_finite_values() {
        for raw in ["NaN", "nan", "inf", "-inf", "infinity", "-Infinity"] {
            let fields: FormFields = [("precio", raw), ("salario", raw)].into_iter().collect();

            assert_eq!(
                fields.decimal("precio"),
                Err(ValidationError::Invalid {
                    field: "precio",
                    expected: "a number",
                    value: raw.to_string(),
                }),
                "input {raw:?}"
            );
            assert!(fields.optional_decimal("salario").is_err(), "input {raw:?}");
        }
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let fields: FormFields = [("fecha", ""), ("salario", "  ")].into_iter().collect();

        assert_eq!(fields.optional_date("fecha"), Ok(None));
        assert_eq!(fields.optional_decimal("salario"), Ok(None));
        assert_eq!(fields.optional_date("missing"), Ok(None));
    }

    #[test]
    fn optional_fields_are_still_type_checked() {
        let fields: FormFields = [("fecha", "2026-11-02"), ("salario", "mucho")]
            .into_iter()
            .collect();

        assert_eq!(
            fields.optional_date("fecha"),
            Ok(NaiveDate::from_ymd_opt(2026, 11, 2))
        );
        assert!(fields.optional_decimal("salario").is_err());
    }
}
