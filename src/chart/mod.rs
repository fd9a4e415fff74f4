pub mod renderers;
pub mod session;

use serde::Serialize;

// Institutional palette, carried over from the dashboard stylesheet.
pub const TEAL: &str = "#54BBAB";
pub const ORANGE: &str = "#F39325";
pub const NAVY: &str = "#17334B";
pub const BURNT: &str = "#D94D15";
pub const TEAL_FILL: &str = "rgba(84, 187, 171, 0.2)";
pub const ORANGE_FILL: &str = "rgba(243, 147, 37, 0.2)";
pub const NAVY_FILL: &str = "rgba(23, 51, 75, 0.2)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Radar,
}

/// Background paint: one color for the whole series, or one color per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerBar(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    #[serde(rename = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(rename = "borderColor", skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(rename = "borderWidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(rename = "borderDash", skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    #[serde(rename = "pointBackgroundColor", skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(rename = "pointRadius", skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
            kind: None,
            background_color: None,
            border_color: None,
            border_width: None,
            border_dash: None,
            point_background_color: None,
            point_radius: None,
            fill: None,
            tension: None,
            order: None,
        }
    }

    /// Horizontal dashed benchmark line: the value repeated across all
    /// slots, no point markers.
    pub fn reference_line(label: impl Into<String>, value: f64, slots: usize, color: &str) -> Self {
        let mut ds = Dataset::new(label, vec![value; slots]);
        ds.kind = Some(ChartKind::Line);
        ds.border_color = Some(color.to_string());
        ds.border_width = Some(2);
        ds.border_dash = Some(vec![5, 5]);
        ds.fill = Some(false);
        ds.point_radius = Some(0);
        ds
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisOptions {
    #[serde(rename = "beginAtZero")]
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl AxisOptions {
    pub fn free() -> Self {
        Self {
            begin_at_zero: false,
            min: None,
            max: None,
        }
    }

    pub fn clamped_min(min: f64) -> Self {
        Self {
            begin_at_zero: false,
            min: Some(min),
            max: None,
        }
    }

    pub fn radial(max: f64) -> Self {
        Self {
            begin_at_zero: true,
            min: None,
            max: Some(max),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<AxisOptions>,
}

/// Declarative chart configuration handed to the charting collaborator. The
/// collaborator owns all drawing; this crate only describes the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub scales: Scales,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub legend: bool,
}
