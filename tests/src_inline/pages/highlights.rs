use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::ChartConfig;
use crate::chart::session::RenderError;
use crate::pages::PageKind;

struct ListCaptureBackend {
    lists: Rc<RefCell<Vec<(String, Vec<ListEntry>)>>>,
}

impl ChartBackend for ListCaptureBackend {
    fn create(&mut self, _surface: &str, _config: &ChartConfig) -> Result<(), RenderError> {
        Ok(())
    }

    fn dispose(&mut self, _surface: &str) -> Result<(), RenderError> {
        Ok(())
    }

    fn write_list(&mut self, container: &str, entries: &[ListEntry]) -> Result<(), RenderError> {
        self.lists
            .borrow_mut()
            .push((container.to_string(), entries.to_vec()));
        Ok(())
    }
}

fn bundle() -> DataBundle {
    let missions = serde_json::from_value(serde_json::json!({
        "resultadosGradoNoveno": {
            "misionGamma": {
                "901": {
                    "totalEstudiantes": 4,
                    "datosIndividuales": [
                        {
                            "nombre": "Ana",
                            "puntajeGeneral": 355.0,
                            "resultadosPorArea": { "matematicas": { "puntaje": 72.0 } }
                        },
                        {
                            "nombre": "Bruno",
                            "puntajeGeneral": 310.0,
                            "resultadosPorArea": { "matematicas": { "puntaje": 68.0 } }
                        },
                        { "nombre": "Carla", "puntajeGeneral": 340.0 },
                        { "nombre": "Diego", "puntajeGeneral": 340.0 }
                    ]
                },
                "902": {
                    "totalEstudiantes": 2,
                    "datosIndividuales": [
                        {
                            "nombre": "Elena",
                            "puntajeGeneral": 325.0,
                            "resultadosPorArea": { "matematicas": { "puntaje": 80.0 } }
                        },
                        { "nombre": "Fabio", "puntajeGeneral": 298.0 }
                    ]
                }
            }
        }
    }))
    .unwrap();
    let horizon = serde_json::from_value(serde_json::json!({
        "horizonteExcelencia": { "data": {} }
    }))
    .unwrap();
    DataBundle { missions, horizon }
}

fn captured_lists(data: &DataBundle) -> Vec<(String, Vec<ListEntry>)> {
    let layout = PageKind::Highlights.layout();
    let lists = Rc::new(RefCell::new(Vec::new()));
    let mut session = RenderSession::new(
        &layout,
        ListCaptureBackend {
            lists: Rc::clone(&lists),
        },
    );
    render_highlights(&mut session, data).unwrap();
    drop(session);
    Rc::try_unwrap(lists).unwrap().into_inner()
}

#[test]
fn test_list_container_names() {
    assert_eq!(area_list_container(Area::Ingles), "top-ingles-list");
}

#[test]
fn test_renders_general_and_per_area_lists() {
    let data = bundle();
    let lists = captured_lists(&data);

    // One general list plus one per area.
    assert_eq!(lists.len(), 1 + ALL_AREAS.len());
    assert_eq!(lists[0].0, "top-general-list");

    let general = &lists[0].1;
    assert_eq!(general.len(), 5);
    assert_eq!(general[0].name, "Ana");
    // Carla and Diego tie at 340.0 and keep cohort order.
    assert_eq!(general[1].name, "Carla");
    assert_eq!(general[2].name, "Diego");
}

#[test]
fn test_area_lists_filter_unscored_students() {
    let data = bundle();
    let lists = captured_lists(&data);

    let matematicas = lists
        .iter()
        .find(|(name, _)| name == "top-matematicas-list")
        .map(|(_, entries)| entries)
        .unwrap();
    assert_eq!(matematicas.len(), 3);
    assert_eq!(matematicas[0].name, "Elena");
    assert_eq!(matematicas[1].name, "Ana");
    assert_eq!(matematicas[2].name, "Bruno");

    let ingles = lists
        .iter()
        .find(|(name, _)| name == "top-ingles-list")
        .map(|(_, entries)| entries)
        .unwrap();
    assert!(ingles.is_empty());
}

#[test]
fn test_missing_cohort_renders_nothing() {
    let missions = serde_json::from_value(serde_json::json!({
        "resultadosGradoNoveno": { "misionAlfa": {} }
    }))
    .unwrap();
    let horizon = serde_json::from_value(serde_json::json!({
        "horizonteExcelencia": { "data": {} }
    }))
    .unwrap();
    let data = DataBundle { missions, horizon };

    let lists = captured_lists(&data);
    assert!(lists.is_empty());
}
