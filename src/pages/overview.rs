use crate::chart::renderers::{global_average_chart, horizon_comparison_chart};
use crate::chart::session::{ChartBackend, RenderSession};
use crate::input::DataBundle;
use crate::input::horizon::{BASELINE_YEAR, TARGET_YEAR};
use crate::model::metric::Metric;
use crate::pages::PageError;
use crate::stats::aggregate::weighted_mission_averages;

// Global averages publish on the 500-point institutional scale.
pub const GLOBAL_SCALE_MAX: f64 = 500.0;

pub fn render_overview<B: ChartBackend>(
    session: &mut RenderSession<'_, B>,
    data: &DataBundle,
) -> Result<(), PageError> {
    let averages =
        weighted_mission_averages(&data.missions, Metric::GlobalAverage, GLOBAL_SCALE_MAX, None);
    let baseline = data.horizon.global_average(BASELINE_YEAR)?;
    let target = data.horizon.global_average(TARGET_YEAR)?;

    session.render_chart("promedioGlobalChart", global_average_chart(&averages))?;
    session.render_chart(
        "comparativaHorizonteChart",
        horizon_comparison_chart(&averages, baseline, target),
    )?;
    Ok(())
}
