use crate::chart::{
    AxisOptions, BURNT, ChartConfig, ChartKind, Dataset, NAVY, NAVY_FILL, ORANGE, ORANGE_FILL,
    Paint, Scales, TEAL, TEAL_FILL,
};
use crate::model::areas::{Area, component_label};
use crate::model::{ALL_MISSIONS, mission_labels};

/// Three mission bars of the grade's global weighted average.
pub fn global_average_chart(averages: &[f64]) -> ChartConfig {
    let mut bars = Dataset::new("Promedio Global del Grado", averages.to_vec());
    bars.background_color = Some(Paint::PerBar(vec![
        TEAL.to_string(),
        ORANGE.to_string(),
        NAVY.to_string(),
    ]));

    ChartConfig {
        kind: ChartKind::Bar,
        labels: mission_labels(),
        datasets: vec![bars],
        scales: Scales {
            y: Some(AxisOptions::clamped_min(floor_margin(averages, &[]))),
            r: None,
        },
        title: Some("Promedio Ponderado del Grado 9°".to_string()),
        legend: false,
    }
}

/// The same mission bars overlaid with two dashed benchmark lines, one per
/// horizon year. Lines draw above the bars (lower order).
pub fn horizon_comparison_chart(averages: &[f64], baseline: f64, target: f64) -> ChartConfig {
    let mut bars = Dataset::new("Promedio Global del Grado", averages.to_vec());
    bars.background_color = Some(Paint::Solid(NAVY.to_string()));
    bars.order = Some(2);

    let mut baseline_line = Dataset::reference_line(
        format!("Horizonte 2023 ({baseline} pts)"),
        baseline,
        averages.len(),
        BURNT,
    );
    baseline_line.order = Some(1);

    let mut target_line = Dataset::reference_line(
        format!("Horizonte 2024 ({target} pts)"),
        target,
        averages.len(),
        TEAL,
    );
    target_line.order = Some(1);

    ChartConfig {
        kind: ChartKind::Bar,
        labels: mission_labels(),
        datasets: vec![bars, baseline_line, target_line],
        scales: Scales {
            y: Some(AxisOptions::clamped_min(floor_margin(
                averages,
                &[baseline, target],
            ))),
            r: None,
        },
        title: Some("Progreso Hacia el Estándar Institucional".to_string()),
        legend: true,
    }
}

/// Filled trend line of one area's average across the missions, with the
/// target-year benchmark as a dashed reference.
pub fn area_trend_chart(averages: &[f64], benchmark: f64) -> ChartConfig {
    let mut trend = Dataset::new("Promedio del Grado", averages.to_vec());
    trend.background_color = Some(Paint::Solid(NAVY_FILL.to_string()));
    trend.border_color = Some(NAVY.to_string());
    trend.border_width = Some(3);
    trend.fill = Some(true);
    trend.tension = Some(0.1);

    let reference = Dataset::reference_line(
        format!("Horizonte 2024 ({benchmark} pts)"),
        benchmark,
        averages.len(),
        BURNT,
    );

    ChartConfig {
        kind: ChartKind::Line,
        labels: mission_labels(),
        datasets: vec![trend, reference],
        scales: Scales {
            y: Some(AxisOptions::free()),
            r: None,
        },
        title: None,
        legend: true,
    }
}

/// One polygon per mission over the area's components, radial axis pinned to
/// the raw 0..5 scale.
pub fn component_radar_chart(area: Area, per_mission: &[Vec<f64>; 3]) -> ChartConfig {
    let palette = [(TEAL, TEAL_FILL), (ORANGE, ORANGE_FILL), (NAVY, NAVY_FILL)];

    let datasets = ALL_MISSIONS
        .iter()
        .zip(per_mission.iter())
        .zip(palette.iter())
        .map(|((mission, data), (border, fill))| {
            let mut ds = Dataset::new(mission.label(), data.clone());
            ds.background_color = Some(Paint::Solid(fill.to_string()));
            ds.border_color = Some(border.to_string());
            ds.point_background_color = Some(border.to_string());
            ds
        })
        .collect();

    ChartConfig {
        kind: ChartKind::Radar,
        labels: area.components().iter().map(|c| component_label(c)).collect(),
        datasets,
        scales: Scales {
            y: None,
            r: Some(AxisOptions::radial(5.0)),
        },
        title: None,
        legend: true,
    }
}

// Clamp the value axis to 20 points under the smallest plotted value so bar
// differences stay visible.
fn floor_margin(data: &[f64], extra: &[f64]) -> f64 {
    data.iter()
        .chain(extra.iter())
        .fold(f64::INFINITY, |min, v| min.min(*v))
        - 20.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/renderers.rs"]
mod tests;
