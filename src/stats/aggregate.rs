use crate::input::missions::MissionResults;
use crate::model::metric::Metric;
use crate::model::{ALL_MISSIONS, Mission};

// Raw component and area scores sit on a fixed 1..5 scale; requesting a
// larger target scale triggers the linear remap below. The threshold and the
// formula are part of the published dashboard semantics and must not change.
pub const RAW_SCALE_MAX: f64 = 5.0;

/// Enrollment-weighted average of `metric` per mission, in fixed mission
/// order (or a single slot when `only` restricts the run). Missions with no
/// groups or zero total enrollment yield 0.0 rather than an error.
pub fn weighted_mission_averages(
    data: &MissionResults,
    metric: Metric,
    scale_max: f64,
    only: Option<Mission>,
) -> Vec<f64> {
    let missions: Vec<Mission> = match only {
        Some(mission) => vec![mission],
        None => ALL_MISSIONS.to_vec(),
    };

    missions
        .into_iter()
        .map(|mission| mission_average(data, mission, metric, scale_max))
        .collect()
}

fn mission_average(data: &MissionResults, mission: Mission, metric: Metric, scale_max: f64) -> f64 {
    let Some(groups) = data.mission(mission) else {
        return 0.0;
    };
    if groups.is_empty() {
        return 0.0;
    }

    let mut total_students = 0u64;
    let mut weighted_sum = 0.0f64;
    for group in groups.values() {
        let value = metric.resolve(&group.aggregates);
        total_students += u64::from(group.total_students);
        weighted_sum += value * f64::from(group.total_students);
    }

    let raw = if total_students > 0 {
        weighted_sum / total_students as f64
    } else {
        0.0
    };

    round1(rescale(raw, scale_max))
}

/// Linear remap of a 1..5 raw average onto [0, scale_max] when the target
/// scale exceeds the raw one; identity otherwise.
pub fn rescale(raw: f64, scale_max: f64) -> f64 {
    if scale_max > RAW_SCALE_MAX {
        ((raw - 1.0) / 4.0) * scale_max
    } else {
        raw
    }
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/aggregate.rs"]
mod tests;
