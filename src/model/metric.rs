use crate::input::missions::GroupAggregates;
use crate::model::areas::Area;

/// Typed path into a group's aggregated-scores tree. Any segment missing from
/// the data resolves to 0.0 instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    GlobalAverage,
    AreaAverage(Area),
    AreaComponent(Area, &'static str),
}

impl Metric {
    pub fn resolve(self, aggregates: &GroupAggregates) -> f64 {
        match self {
            Metric::GlobalAverage => aggregates.global_average.unwrap_or(0.0),
            Metric::AreaAverage(area) => aggregates
                .per_area
                .get(area.key())
                .and_then(|a| a.average)
                .unwrap_or(0.0),
            Metric::AreaComponent(area, component) => aggregates
                .per_area
                .get(area.key())
                .and_then(|a| a.components.get(component))
                .copied()
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metric.rs"]
mod tests;
