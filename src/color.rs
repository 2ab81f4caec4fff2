//! Color lookup for result keys.
//!
//! The report carries its own key-to-color mapping; charts and tables
//! ask this provider for the color of each key they draw. A key without
//! a mapping entry is recoverable and falls back to a default color.

use crate::model::schema::ColorMap;
use crate::utils::config::DEFAULT_COLOR;
use log::debug;

/// Maps result-map keys to stable colors
///
/// **Public** - consumed by chart and table builders
#[derive(Debug, Clone)]
pub struct ColorProvider {
    mapping: ColorMap,
}

impl ColorProvider {
    /// Create a provider from a report's color mapping
    pub fn new(mapping: ColorMap) -> Self {
        Self { mapping }
    }

    /// Color for a result key, falling back to `DEFAULT_COLOR` for
    /// unmapped keys
    pub fn color_of(&self, key: &str) -> &str {
        match self.mapping.get(key) {
            Some(color) => color,
            None => {
                debug!("No color mapped for key '{}', using default", key);
                DEFAULT_COLOR
            }
        }
    }

    /// The underlying key-to-color mapping
    pub fn mapping(&self) -> &ColorMap {
        &self.mapping
    }
}
