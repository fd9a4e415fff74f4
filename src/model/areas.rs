#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Area {
    LecturaCritica,
    Matematicas,
    SocialesCiudadanas,
    CienciasNaturales,
    Ingles,
}

pub const ALL_AREAS: [Area; 5] = [
    Area::LecturaCritica,
    Area::Matematicas,
    Area::SocialesCiudadanas,
    Area::CienciasNaturales,
    Area::Ingles,
];

#[derive(Debug, Clone, Copy)]
pub struct AreaDef {
    pub key: &'static str,
    pub name: &'static str,
    pub components: &'static [&'static str],
}

const LECTURA_CRITICA: AreaDef = AreaDef {
    key: "lecturaCritica",
    name: "Lectura Crítica",
    components: &["sintactico", "semantico", "pragmatico"],
};

const MATEMATICAS: AreaDef = AreaDef {
    key: "matematicas",
    name: "Matemáticas",
    components: &["numericoVariacional", "geometricoMetrico", "aleatorio"],
};

const SOCIALES_CIUDADANAS: AreaDef = AreaDef {
    key: "socialesCiudadanas",
    name: "Sociales y Ciudadanas",
    components: &["espacioAmbiente", "historiaCultura", "eticoPolitico"],
};

const CIENCIAS_NATURALES: AreaDef = AreaDef {
    key: "cienciasNaturales",
    name: "Ciencias Naturales",
    components: &["entornoBiologico", "entornoFisico", "cienciaTecnologiaSociedad"],
};

const INGLES: AreaDef = AreaDef {
    key: "ingles",
    name: "Inglés",
    components: &["lectura", "lexical", "gramatical"],
};

impl Area {
    pub fn def(self) -> &'static AreaDef {
        match self {
            Area::LecturaCritica => &LECTURA_CRITICA,
            Area::Matematicas => &MATEMATICAS,
            Area::SocialesCiudadanas => &SOCIALES_CIUDADANAS,
            Area::CienciasNaturales => &CIENCIAS_NATURALES,
            Area::Ingles => &INGLES,
        }
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn components(self) -> &'static [&'static str] {
        self.def().components
    }

    pub fn from_key(key: &str) -> Option<Area> {
        ALL_AREAS.into_iter().find(|a| a.key() == key)
    }
}

// "numericoVariacional" -> "numerico Variacional", matching how the dashboard
// renders component axis labels.
pub fn component_label(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/areas.rs"]
mod tests;
