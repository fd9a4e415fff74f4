use crate::chart::renderers::{area_trend_chart, component_radar_chart};
use crate::chart::session::{ChartBackend, RenderSession};
use crate::input::DataBundle;
use crate::input::horizon::TARGET_YEAR;
use crate::model::areas::Area;
use crate::model::metric::Metric;
use crate::model::{ALL_MISSIONS, Mission};
use crate::pages::PageError;
use crate::stats::aggregate::weighted_mission_averages;

// Area averages publish on a 100-point scale; components stay on the raw
// 1..5 scale (a target of 1 never triggers the remap).
pub const AREA_SCALE_MAX: f64 = 100.0;
pub const COMPONENT_SCALE_MAX: f64 = 1.0;

pub fn trend_surface(area: Area) -> String {
    format!("{}PromedioChart", area.key())
}

pub fn radar_surface(area: Area) -> String {
    format!("{}ComponentesChart", area.key())
}

/// The multi-area page. One tab per area; activating a tab re-runs the
/// aggregation and both renderers for that area, replacing any charts still
/// bound to its surfaces.
pub struct AreasPage {
    active: Area,
}

impl Default for AreasPage {
    fn default() -> Self {
        Self::new()
    }
}

impl AreasPage {
    pub fn new() -> Self {
        Self {
            active: Area::LecturaCritica,
        }
    }

    pub fn active(&self) -> Area {
        self.active
    }

    pub fn activate<B: ChartBackend>(
        &mut self,
        session: &mut RenderSession<'_, B>,
        data: &DataBundle,
        area: Area,
    ) -> Result<(), PageError> {
        self.active = area;
        tracing::debug!(tab = area.name(), "area tab activated");

        let averages =
            weighted_mission_averages(&data.missions, Metric::AreaAverage(area), AREA_SCALE_MAX, None);
        let benchmark = data.horizon.area_average(TARGET_YEAR, area)?;
        let per_mission = component_averages(data, area);

        session.render_chart(&trend_surface(area), area_trend_chart(&averages, benchmark))?;
        session.render_chart(&radar_surface(area), component_radar_chart(area, &per_mission))?;
        Ok(())
    }
}

fn component_averages(data: &DataBundle, area: Area) -> [Vec<f64>; 3] {
    let mut per_mission: [Vec<f64>; 3] = Default::default();
    for (slot, mission) in ALL_MISSIONS.iter().enumerate() {
        per_mission[slot] = area
            .components()
            .iter()
            .copied()
            .map(|component| single_component_average(data, area, component, *mission))
            .collect();
    }
    per_mission
}

fn single_component_average(data: &DataBundle, area: Area, component: &'static str, mission: Mission) -> f64 {
    weighted_mission_averages(
        &data.missions,
        Metric::AreaComponent(area, component),
        COMPONENT_SCALE_MAX,
        Some(mission),
    )
    .first()
    .copied()
    .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pages/areas.rs"]
mod tests;
