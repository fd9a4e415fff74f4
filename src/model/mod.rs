pub mod areas;
pub mod metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mission {
    Alfa,
    Beta,
    Gamma,
}

// Fixed mission order; every per-mission series follows it.
pub const ALL_MISSIONS: [Mission; 3] = [Mission::Alfa, Mission::Beta, Mission::Gamma];

impl Mission {
    pub fn key(self) -> &'static str {
        match self {
            Mission::Alfa => "misionAlfa",
            Mission::Beta => "misionBeta",
            Mission::Gamma => "misionGamma",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mission::Alfa => "Misión Alfa",
            Mission::Beta => "Misión Beta",
            Mission::Gamma => "Misión Gamma",
        }
    }
}

pub fn mission_labels() -> Vec<String> {
    ALL_MISSIONS.iter().map(|m| m.label().to_string()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mission.rs"]
mod tests;
