//! Declarative form validation.
//!
//! Rules per field are checked in a fixed order: `required`, `min_length`,
//! `max_length`, `pattern`. An empty required field stops there; otherwise
//! every rule runs and the last failing one sets the field's message.
//! Lengths count Unicode scalar values.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "Ce champ est requis";
pub const INVALID_FORMAT_MESSAGE: &str = "Format invalide";

#[derive(Clone, Debug, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    /// Message shown when `pattern` does not match.
    pub message: Option<String>,
}

impl FieldRules {
    pub fn required() -> Self {
        Self { required: true, ..Self::default() }
    }

    #[must_use]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: Regex, message: Option<&str>) -> Self {
        self.pattern = Some(pattern);
        self.message = message.map(str::to_owned);
        self
    }

    fn check(&self, value: &str) -> Option<String> {
        if self.required && value.is_empty() {
            return Some(REQUIRED_MESSAGE.to_owned());
        }

        let mut error = None;
        let len = value.chars().count();
        if let Some(min) = self.min_length.filter(|min| len < *min) {
            error = Some(format!("Minimum {min} caractères requis"));
        }
        if let Some(max) = self.max_length.filter(|max| len > *max) {
            error = Some(format!("Maximum {max} caractères autorisés"));
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                error = Some(self.message.clone().unwrap_or_else(|| INVALID_FORMAT_MESSAGE.to_owned()));
            }
        }
        error
    }
}

/// Rules for a whole form, keyed by field name.
#[derive(Clone, Debug, Default)]
pub struct FormRules {
    fields: BTreeMap<String, FieldRules>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, name: &str, rules: FieldRules) -> Self {
        self.fields.insert(name.to_owned(), rules);
        self
    }
}

/// Field name → first user-facing message for that field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Record a message produced outside the declarative rules.
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_owned(), message.to_owned());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Validate submitted `(name, value)` pairs. Fields without rules are ignored.
///
/// # Errors
///
/// Returns the per-field messages when at least one rule failed.
pub fn validate<'a, I>(fields: I, rules: &FormRules) -> Result<(), ValidationErrors>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut errors = BTreeMap::new();
    for (name, value) in fields {
        let Some(field_rules) = rules.fields.get(name) else {
            continue;
        };
        if let Some(message) = field_rules.check(value) {
            errors.insert(name.to_owned(), message);
        }
    }
    if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
}
