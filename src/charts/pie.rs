//! Pie chart model for one item's result distribution.
//!
//! Renderer-agnostic: the model is plain serializable data (one slice
//! per result key plus the aligned color list), written as JSON for
//! whatever chart library the host embeds.

use crate::color::ColorProvider;
use crate::model::schema::Item;
use serde::Serialize;

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieData {
    /// Result-map key
    pub name: String,

    /// Count for this key
    pub value: i64,
}

/// UI model for a pie chart of an item's result map
///
/// **Public** - serialized for the chart renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartModel {
    /// Stable key of the item this chart shows
    pub id: String,

    /// One slice per result key, in result-map order
    pub data: Vec<PieData>,

    /// Slice colors, aligned index-for-index with `data`
    pub colors: Vec<String>,
}

/// Build the pie chart model for an item
///
/// **Public** - main entry point for pie chart data
pub fn pie_model(item: &Item, colors: &ColorProvider) -> PieChartModel {
    let mut data = Vec::with_capacity(item.result.len());
    let mut slice_colors = Vec::with_capacity(item.result.len());

    for (key, value) in item.result.iter() {
        data.push(PieData {
            name: key.to_string(),
            value: *value,
        });
        slice_colors.push(colors.color_of(key).to_string());
    }

    PieChartModel {
        id: item.id.clone(),
        data,
        colors: slice_colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::schema::{ColorMap, ResultMap};
    use crate::utils::config::DEFAULT_COLOR;

    #[test]
    fn test_pie_model_slices_and_colors() {
        let item = Item {
            id: "ui".to_string(),
            name: "UI".to_string(),
            result: ResultMap::from([("PASSED", 8), ("FAILED", 2)]),
            items: Vec::new(),
        };
        let colors = ColorProvider::new(ColorMap::from([
            ("PASSED", "#A5D6A7".to_string()),
            ("FAILED", "#EF9A9A".to_string()),
        ]));

        let model = pie_model(&item, &colors);

        assert_eq!(model.id, "ui");
        assert_eq!(model.data.len(), 2);
        assert_eq!(model.data[0].name, "PASSED");
        assert_eq!(model.data[0].value, 8);
        assert_eq!(model.colors, vec!["#A5D6A7", "#EF9A9A"]);
    }

    #[test]
    fn test_pie_model_unmapped_key_gets_default_color() {
        let item = Item {
            id: "x".to_string(),
            name: String::new(),
            result: ResultMap::from([("ODD", 1)]),
            items: Vec::new(),
        };
        let colors = ColorProvider::new(ColorMap::new());

        let model = pie_model(&item, &colors);
        assert_eq!(model.colors, vec![DEFAULT_COLOR]);
    }
}
