use super::*;

#[test]
fn test_every_area_has_three_components() {
    for area in ALL_AREAS {
        assert_eq!(area.components().len(), 3, "{}", area.key());
    }
}

#[test]
fn test_from_key_roundtrip() {
    for area in ALL_AREAS {
        assert_eq!(Area::from_key(area.key()), Some(area));
    }
    assert_eq!(Area::from_key("filosofia"), None);
}

#[test]
fn test_component_label_splits_camel_case() {
    assert_eq!(component_label("numericoVariacional"), "numerico Variacional");
    assert_eq!(
        component_label("cienciaTecnologiaSociedad"),
        "ciencia Tecnologia Sociedad"
    );
    assert_eq!(component_label("lectura"), "lectura");
}
