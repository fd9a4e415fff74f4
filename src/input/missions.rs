use std::collections::BTreeMap;

use serde::Deserialize;

use crate::model::Mission;

// Wire format of data/resultados_misiones.json. Field renames match the
// document keys exactly; optional subtrees default so sparse documents still
// load (schema validation is out of scope).

pub type MissionGroups = BTreeMap<String, GroupRecord>;

#[derive(Debug, Clone, Deserialize)]
pub struct MissionResults {
    #[serde(rename = "resultadosGradoNoveno")]
    pub grade: BTreeMap<String, MissionGroups>,
}

impl MissionResults {
    pub fn mission(&self, mission: Mission) -> Option<&MissionGroups> {
        self.grade.get(mission.key())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupRecord {
    #[serde(rename = "totalEstudiantes")]
    pub total_students: u32,
    #[serde(rename = "datosAgregados", default)]
    pub aggregates: GroupAggregates,
    #[serde(rename = "datosIndividuales", default)]
    pub students: Vec<StudentRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupAggregates {
    #[serde(rename = "promedioGlobal")]
    pub global_average: Option<f64>,
    #[serde(rename = "promediosPorArea", default)]
    pub per_area: BTreeMap<String, AreaAggregate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AreaAggregate {
    #[serde(rename = "promedio")]
    pub average: Option<f64>,
    #[serde(rename = "componentes", default)]
    pub components: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "puntajeGeneral")]
    pub overall_score: Option<f64>,
    #[serde(rename = "resultadosPorArea", default)]
    pub area_results: BTreeMap<String, StudentAreaResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentAreaResult {
    #[serde(rename = "puntaje")]
    pub score: Option<f64>,
}
