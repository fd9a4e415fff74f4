use std::cmp::Ordering;
use std::fmt;

use crate::input::missions::{MissionGroups, StudentRecord};
use crate::model::areas::Area;

/// Display value for a resolved score. A student without the requested field
/// still renders, as "N/A", and sorts below every numeric score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayScore {
    Value(f64),
    NotAvailable,
}

impl DisplayScore {
    pub fn value(self) -> Option<f64> {
        match self {
            DisplayScore::Value(v) => Some(v),
            DisplayScore::NotAvailable => None,
        }
    }
}

impl fmt::Display for DisplayScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayScore::Value(v) => write!(f, "{v}"),
            DisplayScore::NotAvailable => write!(f, "N/A"),
        }
    }
}

impl serde::Serialize for DisplayScore {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DisplayScore::Value(v) => serializer.serialize_f64(*v),
            DisplayScore::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreField {
    Overall,
    Area(Area),
}

impl ScoreField {
    pub fn resolve(self, student: &StudentRecord) -> Option<f64> {
        match self {
            ScoreField::Overall => student.overall_score,
            ScoreField::Area(area) => student
                .area_results
                .get(area.key())
                .and_then(|r| r.score),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RankedStudent<'a> {
    pub student: &'a StudentRecord,
    pub score: DisplayScore,
}

/// Flattens every group's individual records for one mission, in group-key
/// order.
pub fn collect_students(groups: &MissionGroups) -> Vec<&StudentRecord> {
    groups.values().flat_map(|g| g.students.iter()).collect()
}

/// Top `cutoff` students by `field`, descending. The sort is stable, so ties
/// keep their original relative order; students whose field does not resolve
/// sort last (or are dropped entirely when `require_present` is set).
pub fn top_students<'a>(
    students: &[&'a StudentRecord],
    field: ScoreField,
    cutoff: usize,
    require_present: bool,
) -> Vec<RankedStudent<'a>> {
    let mut ranked: Vec<RankedStudent<'a>> = students
        .iter()
        .copied()
        .filter(|s| !require_present || field.resolve(s).is_some())
        .map(|s| RankedStudent {
            student: s,
            score: match field.resolve(s) {
                Some(v) => DisplayScore::Value(v),
                None => DisplayScore::NotAvailable,
            },
        })
        .collect();

    ranked.sort_by(|a, b| rank_order(a.score, b.score));
    ranked.truncate(cutoff);
    ranked
}

fn rank_order(a: DisplayScore, b: DisplayScore) -> Ordering {
    match (a.value(), b.value()) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/leaderboard.rs"]
mod tests;
