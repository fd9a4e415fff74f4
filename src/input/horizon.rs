use std::collections::BTreeMap;

use serde::Deserialize;

use crate::input::InputError;
use crate::model::areas::Area;

pub const BASELINE_YEAR: &str = "2023";
pub const TARGET_YEAR: &str = "2024";

// Wire format of data/horizonte_excelencia.json.

#[derive(Debug, Clone, Deserialize)]
pub struct ExcellenceHorizon {
    #[serde(rename = "horizonteExcelencia")]
    pub horizon: HorizonBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HorizonBody {
    pub data: BTreeMap<String, YearBenchmark>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YearBenchmark {
    #[serde(rename = "puntajeGlobal")]
    pub global: BenchmarkValue,
    #[serde(default)]
    pub areas: BTreeMap<String, BenchmarkValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkValue {
    #[serde(rename = "promedio")]
    pub average: f64,
}

impl ExcellenceHorizon {
    /// Global benchmark for a year. A configured year missing from the
    /// document is malformed data, reported through the load taxonomy.
    pub fn global_average(&self, year: &str) -> Result<f64, InputError> {
        self.horizon
            .data
            .get(year)
            .map(|y| y.global.average)
            .ok_or_else(|| InputError::MissingBenchmark(year.to_string()))
    }

    pub fn area_average(&self, year: &str, area: Area) -> Result<f64, InputError> {
        let benchmark = self
            .horizon
            .data
            .get(year)
            .ok_or_else(|| InputError::MissingBenchmark(year.to_string()))?;
        benchmark
            .areas
            .get(area.key())
            .map(|b| b.average)
            .ok_or_else(|| InputError::MissingBenchmark(format!("{year}/{}", area.key())))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/horizon.rs"]
mod tests;
