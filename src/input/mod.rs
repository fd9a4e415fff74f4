use std::path::{Path, PathBuf};
use std::thread;

pub mod horizon;
pub mod missions;

use horizon::ExcellenceHorizon;
use missions::MissionResults;

pub const MISSIONS_FILE: &str = "resultados_misiones.json";
pub const HORIZON_FILE: &str = "horizonte_excelencia.json";

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("benchmark {0} missing from excellence horizon")]
    MissingBenchmark(String),
}

#[derive(Debug, Clone)]
pub struct DataBundle {
    pub missions: MissionResults,
    pub horizon: ExcellenceHorizon,
}

/// Loads both datasets on two scoped threads and joins them. Either failure
/// aborts the whole load; nothing downstream renders from a partial bundle.
pub fn load_datasets(data_dir: &Path) -> Result<DataBundle, InputError> {
    let missions_path = data_dir.join(MISSIONS_FILE);
    let horizon_path = data_dir.join(HORIZON_FILE);

    tracing::info!(
        missions = %missions_path.display(),
        horizon = %horizon_path.display(),
        "loading datasets"
    );

    let (missions, horizon) = thread::scope(|s| {
        let missions = s.spawn(|| load_json::<MissionResults>(&missions_path));
        let horizon = s.spawn(|| load_json::<ExcellenceHorizon>(&horizon_path));
        (join_load(missions), join_load(horizon))
    });

    Ok(DataBundle {
        missions: missions?,
        horizon: horizon?,
    })
}

fn join_load<T>(handle: thread::ScopedJoinHandle<'_, Result<T, InputError>>) -> Result<T, InputError> {
    match handle.join() {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
