//! palette.rs
//!
//! The fixed, ordered set of colors a participant can vote for.
//!
//! Order matters: it is the order results are listed in and the order used
//! to break ties between options with the same number of votes.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChromaError, Result};

/// One votable choice. `color_value` is opaque to the tally and only carried
/// through for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    pub color_value: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, color_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color_value: color_value.into(),
        }
    }
}

const STANDARD_COLORS: [(&str, &str); 8] = [
    ("Red", "#ef4444"),
    ("Blue", "#3b82f6"),
    ("Green", "#10b981"),
    ("Purple", "#8b5cf6"),
    ("Orange", "#f97316"),
    ("Pink", "#ec4899"),
    ("Yellow", "#eab308"),
    ("Teal", "#14b8a6"),
];

/// Immutable ordered list of options, cheap to clone and share between
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    options: Arc<[ColorOption]>,
}

impl Palette {
    /// Builds a palette, rejecting empty lists, blank names and duplicates.
    pub fn new(options: Vec<ColorOption>) -> Result<Self> {
        if options.is_empty() {
            return Err(ChromaError::InvalidPalette("palette has no options".into()));
        }

        let mut seen = HashSet::new();
        for option in &options {
            if option.name.trim().is_empty() {
                return Err(ChromaError::InvalidPalette("option name is empty".into()));
            }
            if !seen.insert(option.name.as_str()) {
                return Err(ChromaError::InvalidPalette(format!(
                    "duplicate option name: {}",
                    option.name
                )));
            }
        }

        Ok(Self {
            options: options.into(),
        })
    }

    /// The eight standard colors.
    pub fn standard() -> Self {
        Self {
            options: standard_options().into(),
        }
    }

    pub fn options(&self) -> &[ColorOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorOption> {
        self.options.iter()
    }

    pub fn find(&self, name: &str) -> Option<&ColorOption> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorOption;
    type IntoIter = std::slice::Iter<'a, ColorOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn standard_options() -> Vec<ColorOption> {
    STANDARD_COLORS
        .iter()
        .map(|(name, hex)| ColorOption::new(*name, *hex))
        .collect()
}
