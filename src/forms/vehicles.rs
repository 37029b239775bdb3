//! Query-string form for the vehicle listing.
//!
//! Every recognised parameter is captured as a raw string and checked against
//! an ordered rule table. Rules are evaluated independently, so a single value
//! can violate several of them and all violations are reported.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::vehicle::SortKey;
use crate::forms::FormError;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::VehicleListQuery;

/// Key under which unrecognised parameters are reported.
pub const UNKNOWN_FIELDS_KEY: &str = "__all__";

/// Largest `page` or `limit` honoured. Larger integers are clamped to it.
pub const MAX_COUNT: u32 = u32::MAX;

/// Recognised parameters, in the order their violations are reported.
pub const FIELDS: [&str; 8] = [
    "page",
    "limit",
    "manufacturer",
    "type",
    "year",
    "priceMin",
    "priceMax",
    "sort",
];

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclesQueryForm {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub manufacturer: Option<String>,
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub year: Option<String>,
    pub sort: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    /// Anything outside the allow-list; always a violation.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, String>,
}

struct Rule {
    field: &'static str,
    code: &'static str,
    message: &'static str,
    check: fn(&VehiclesQueryForm) -> bool,
}

const SORT_VALUES_MESSAGE: &str =
    "sort must be one of the following values: manufacturer, model, type, year, price";

const RULES: &[Rule] = &[
    Rule {
        field: "page",
        code: "min",
        message: "page must not be less than 1",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.page).is_none_or(|n| n >= 1.0)
        },
    },
    Rule {
        field: "page",
        code: "is_int",
        message: "page must be an integer number",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.page).is_none_or(is_integer)
        },
    },
    Rule {
        field: "limit",
        code: "min",
        message: "limit must not be less than 1",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.limit).is_none_or(|n| n >= 1.0)
        },
    },
    Rule {
        field: "limit",
        code: "is_int",
        message: "limit must be an integer number",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.limit).is_none_or(is_integer)
        },
    },
    Rule {
        field: "year",
        code: "is_int",
        message: "year must be an integer number",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.year).is_none_or(is_integer)
        },
    },
    Rule {
        field: "priceMin",
        code: "is_number",
        message: "priceMin must be a number conforming to the specified constraints",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.price_min).is_none_or(f64::is_finite)
        },
    },
    Rule {
        field: "priceMin",
        code: "min",
        message: "priceMin must not be less than 0",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.price_min).is_none_or(|n| n >= 0.0)
        },
    },
    Rule {
        field: "priceMax",
        code: "is_number",
        message: "priceMax must be a number conforming to the specified constraints",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.price_max).is_none_or(f64::is_finite)
        },
    },
    Rule {
        field: "priceMax",
        code: "min",
        message: "priceMax must not be less than 0",
        check: |form: &VehiclesQueryForm| {
            optional_number(&form.price_max).is_none_or(|n| n >= 0.0)
        },
    },
    Rule {
        field: "sort",
        code: "is_in",
        message: SORT_VALUES_MESSAGE,
        check: |form: &VehiclesQueryForm| {
            present(&form.sort).is_none_or(|s| s.parse::<SortKey>().is_ok())
        },
    },
];

/// Trimmed value, or `None` when missing or blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Loose numeric coercion in the manner of JavaScript's `Number()`: decimal
/// literals with an optional exponent, `0x`/`0o`/`0b` integers and signed
/// `Infinity`. Anything else becomes NaN, which fails every numeric rule.
fn coerce_number(raw: &str) -> f64 {
    match raw {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match raw.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&raw[2..], radix);
    }

    // `str::parse` also knows `inf` and `nan`, which are not numbers here.
    if raw
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    raw.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Validated page number or page size as a count, clamped to [`MAX_COUNT`].
fn to_count(n: f64) -> usize {
    let n = n.clamp(1.0, f64::from(MAX_COUNT));
    usize::try_from(n as u32).unwrap_or(usize::MAX)
}

/// Validated year. Beyond the `i64` range it saturates, which still matches
/// no vehicle because vehicle years are `i32`.
fn to_year(n: f64) -> i64 {
    n.clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

fn optional_number(value: &Option<String>) -> Option<f64> {
    present(value).map(coerce_number)
}

fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

impl VehiclesQueryForm {
    /// Decodes a raw `application/x-www-form-urlencoded` query string.
    pub fn from_query_string(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query).map_err(|err| FormError::Malformed(err.to_string()))
    }

    /// Validates the form and applies defaults for absent values.
    pub fn to_query(&self) -> Result<VehicleListQuery, FormError> {
        self.validate()?;

        let page = optional_number(&self.page).map_or(1, to_count);
        let limit = optional_number(&self.limit).map_or(DEFAULT_ITEMS_PER_PAGE, to_count);

        let mut query = VehicleListQuery::new().paginate(page, limit);
        if let Some(manufacturer) = present(&self.manufacturer) {
            query = query.manufacturer(manufacturer);
        }
        if let Some(vehicle_type) = present(&self.vehicle_type) {
            query = query.vehicle_type(vehicle_type);
        }
        if let Some(year) = optional_number(&self.year) {
            query = query.year(to_year(year));
        }
        if let Some(price) = optional_number(&self.price_min) {
            query = query.price_min(price);
        }
        if let Some(price) = optional_number(&self.price_max) {
            query = query.price_max(price);
        }
        if let Some(key) = present(&self.sort).and_then(|s| s.parse().ok()) {
            query = query.sort_by(key);
        }

        Ok(query)
    }
}

impl Validate for VehiclesQueryForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for name in self.unknown.keys() {
            let mut error = ValidationError::new("whitelist")
                .with_message(Cow::Owned(format!("property {name} should not exist")));
            error.add_param(Cow::Borrowed("property"), name);
            errors.add(UNKNOWN_FIELDS_KEY, error);
        }

        for rule in RULES.iter().filter(|rule| !(rule.check)(self)) {
            let mut error =
                ValidationError::new(rule.code).with_message(Cow::Borrowed(rule.message));
            if let Some(value) = self.raw_value(rule.field) {
                error.add_param(Cow::Borrowed("value"), &value);
            }
            errors.add(rule.field, error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl VehiclesQueryForm {
    fn raw_value(&self, field: &str) -> Option<&str> {
        let value = match field {
            "page" => &self.page,
            "limit" => &self.limit,
            "manufacturer" => &self.manufacturer,
            "type" => &self.vehicle_type,
            "year" => &self.year,
            "priceMin" => &self.price_min,
            "priceMax" => &self.price_max,
            "sort" => &self.sort,
            _ => return None,
        };
        value.as_deref()
    }
}

/// Flattens `errors` into human-readable messages: unrecognised parameters
/// first, then rule violations in declaration order.
pub fn ordered_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();

    std::iter::once(UNKNOWN_FIELDS_KEY)
        .chain(FIELDS)
        .filter_map(|field| {
            field_errors
                .iter()
                .find(|(name, _)| **name == field)
                .map(|(_, errors)| *errors)
        })
        .flatten()
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect()
}
