//! Path → route resolution.
//!
//! An exact literal match is tried first. Otherwise the table is scanned in
//! order for a pattern with the same segment count whose literal segments
//! are equal; `:name` segments accept any single segment, including an empty
//! one. There is no specificity ranking.

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;

use super::routes::{APP_ROUTES, RouteSpec};

const PARAM_PREFIX: char = ':';

/// A route plus the path parameters extracted for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: RouteSpec,
    pub params: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    /// Numeric `:id` parameter, if present and all digits.
    pub fn numeric_id(&self) -> Option<i64> {
        let raw = self.param("id")?;
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        raw.parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteSpec>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(APP_ROUTES.to_vec())
    }
}

impl RouteTable {
    pub fn new(routes: Vec<RouteSpec>) -> Self {
        Self { routes }
    }

    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        if let Some(route) = self.routes.iter().find(|r| r.pattern == path) {
            return Some(RouteMatch { route: *route, params: literal_params(route.pattern) });
        }
        self.routes
            .iter()
            .find_map(|route| match_pattern(route.pattern, path).map(|params| RouteMatch { route: *route, params }))
    }
}

/// Params for an exact literal hit (only non-empty when the path itself
/// spells a placeholder, e.g. `/forms/:id`).
fn literal_params(pattern: &str) -> Vec<(String, String)> {
    pattern
        .split('/')
        .filter_map(|segment| segment.strip_prefix(PARAM_PREFIX))
        .map(|name| (name.to_owned(), format!("{PARAM_PREFIX}{name}")))
        .collect()
}

fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let pattern_parts: Vec<&str> = pattern.split('/').collect();
    let path_parts: Vec<&str> = path.split('/').collect();
    if pattern_parts.len() != path_parts.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_parts.iter().zip(&path_parts) {
        if let Some(name) = expected.strip_prefix(PARAM_PREFIX) {
            params.push((name.to_owned(), (*actual).to_owned()));
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}
