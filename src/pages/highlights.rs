use crate::chart::session::{ChartBackend, ListEntry, RenderSession};
use crate::input::DataBundle;
use crate::model::Mission;
use crate::model::areas::{ALL_AREAS, Area};
use crate::pages::PageError;
use crate::stats::leaderboard::{RankedStudent, ScoreField, collect_students, top_students};

// The highlights page celebrates the most recent mission's cohort.
pub const HIGHLIGHT_MISSION: Mission = Mission::Gamma;
pub const TOP_GENERAL: usize = 5;
pub const TOP_PER_AREA: usize = 3;

pub fn area_list_container(area: Area) -> String {
    format!("top-{}-list", area.key())
}

pub fn render_highlights<B: ChartBackend>(
    session: &mut RenderSession<'_, B>,
    data: &DataBundle,
) -> Result<(), PageError> {
    let Some(groups) = data.missions.mission(HIGHLIGHT_MISSION) else {
        tracing::warn!(
            mission = HIGHLIGHT_MISSION.key(),
            "highlight cohort missing, nothing to render"
        );
        return Ok(());
    };
    let students = collect_students(groups);

    let top_general = top_students(&students, ScoreField::Overall, TOP_GENERAL, false);
    session.render_list("top-general-list", &to_entries(&top_general))?;

    for area in ALL_AREAS {
        let top_area = top_students(&students, ScoreField::Area(area), TOP_PER_AREA, true);
        session.render_list(&area_list_container(area), &to_entries(&top_area))?;
    }
    Ok(())
}

fn to_entries(ranked: &[RankedStudent<'_>]) -> Vec<ListEntry> {
    ranked
        .iter()
        .map(|r| ListEntry {
            name: r.student.name.clone(),
            score: r.score,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pages/highlights.rs"]
mod tests;
