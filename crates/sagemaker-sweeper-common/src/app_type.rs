//! Studio application type selector

use crate::defaults::APP_TYPE_WILDCARD;
use std::fmt;

/// Restricts which Studio application types a sweep touches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppTypeSelector {
    /// Every application type
    #[default]
    Any,
    /// Exactly one application type, compared case-sensitively
    Only(String),
}

impl AppTypeSelector {
    /// Parse a selector. `*` and `all` (any case) are wildcards.
    ///
    /// An empty string yields `Only("")`, which matches nothing; config
    /// validation rejects it before a sweep starts.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value == APP_TYPE_WILDCARD || value.eq_ignore_ascii_case("all") {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Check whether an application type is selected
    pub fn matches(&self, app_type: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(selected) => selected == app_type,
        }
    }

    /// True when the selector names an empty type
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(s) if s.is_empty())
    }
}

impl fmt::Display for AppTypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(APP_TYPE_WILDCARD),
            Self::Only(selected) => f.write_str(selected),
        }
    }
}
