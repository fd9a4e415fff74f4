use super::*;

use std::path::PathBuf;

use crate::model::Mission;

const MISSIONS_DOC: &str = r#"{
    "colegio": "Institución Educativa Horizonte",
    "resultadosGradoNoveno": {
        "misionAlfa": {
            "901": {
                "totalEstudiantes": 32,
                "datosAgregados": {
                    "promedioGlobal": 3.1,
                    "promediosPorArea": {
                        "matematicas": {
                            "promedio": 3.0,
                            "componentes": { "aleatorio": 2.9 }
                        }
                    }
                }
            },
            "902": { "totalEstudiantes": 30 }
        },
        "misionBeta": {},
        "misionGamma": {
            "901": {
                "totalEstudiantes": 31,
                "datosAgregados": { "promedioGlobal": 3.6 },
                "datosIndividuales": [
                    { "nombre": "Ana", "puntajeGeneral": 355.0 }
                ]
            }
        }
    }
}"#;

const HORIZON_DOC: &str = r#"{
    "horizonteExcelencia": {
        "descripcion": "promedios históricos de referencia",
        "data": {
            "2023": { "puntajeGlobal": { "promedio": 295.0 } },
            "2024": {
                "puntajeGlobal": { "promedio": 310.0 },
                "areas": { "matematicas": { "promedio": 68.0 } }
            }
        }
    }
}"#;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("saber-dash-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_missions_document_parses_with_defaults() {
    let doc: MissionResults = serde_json::from_str(MISSIONS_DOC).unwrap();

    let alfa = doc.mission(Mission::Alfa).unwrap();
    assert_eq!(alfa.len(), 2);
    assert_eq!(alfa["901"].total_students, 32);

    // Group without datosAgregados/datosIndividuales defaults cleanly.
    assert!(alfa["902"].aggregates.global_average.is_none());
    assert!(alfa["902"].students.is_empty());

    let gamma = doc.mission(Mission::Gamma).unwrap();
    assert_eq!(gamma["901"].students[0].name, "Ana");
}

#[test]
fn test_horizon_document_parses() {
    let doc: ExcellenceHorizon = serde_json::from_str(HORIZON_DOC).unwrap();
    assert_eq!(doc.global_average("2023").unwrap(), 295.0);
    assert_eq!(doc.global_average("2024").unwrap(), 310.0);
}

#[test]
fn test_load_datasets_joins_both_documents() {
    let dir = temp_dir("load-ok");
    std::fs::write(dir.join(MISSIONS_FILE), MISSIONS_DOC).unwrap();
    std::fs::write(dir.join(HORIZON_FILE), HORIZON_DOC).unwrap();

    let bundle = load_datasets(&dir).unwrap();
    assert!(bundle.missions.mission(Mission::Alfa).is_some());
    assert_eq!(bundle.horizon.global_average("2024").unwrap(), 310.0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_datasets_fails_when_either_file_is_missing() {
    let dir = temp_dir("load-missing");
    std::fs::write(dir.join(MISSIONS_FILE), MISSIONS_DOC).unwrap();

    let err = load_datasets(&dir).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_datasets_fails_on_malformed_json() {
    let dir = temp_dir("load-bad");
    std::fs::write(dir.join(MISSIONS_FILE), MISSIONS_DOC).unwrap();
    std::fs::write(dir.join(HORIZON_FILE), "{ not json").unwrap();

    let err = load_datasets(&dir).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }));

    std::fs::remove_dir_all(&dir).unwrap();
}
