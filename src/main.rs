mod chart;
mod input;
mod model;
mod pages;
mod stats;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::chart::session::{JsonFileBackend, RenderSession};
use crate::input::{DataBundle, load_datasets};
use crate::model::areas::{ALL_AREAS, Area};
use crate::pages::areas::AreasPage;
use crate::pages::{ALL_PAGES, PageError, PageKind};

#[derive(Debug, Parser)]
#[command(name = "saber-dash", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render dashboard chart configurations and leaderboard lists.
    Render {
        /// Directory holding resultados_misiones.json and
        /// horizonte_excelencia.json.
        #[arg(long)]
        data: PathBuf,
        /// Output directory; each page writes its surface documents under a
        /// subdirectory named after the page.
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value = "all")]
        page: PageArg,
        /// Tab to activate on the areas page.
        #[arg(long, value_enum, default_value = "lectura-critica")]
        area: AreaArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PageArg {
    Overview,
    Areas,
    Highlights,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AreaArg {
    LecturaCritica,
    Matematicas,
    SocialesCiudadanas,
    CienciasNaturales,
    Ingles,
    All,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), PageError> {
    match cli.command {
        Command::Render {
            data,
            out,
            page,
            area,
        } => {
            let bundle = load_datasets(&data)?;
            for kind in selected_pages(page) {
                render_page(kind, &bundle, &out, area_selection(area))?;
            }
            Ok(())
        }
    }
}

fn selected_pages(arg: PageArg) -> Vec<PageKind> {
    match arg {
        PageArg::Overview => vec![PageKind::Overview],
        PageArg::Areas => vec![PageKind::Areas],
        PageArg::Highlights => vec![PageKind::Highlights],
        PageArg::All => ALL_PAGES.to_vec(),
    }
}

fn area_selection(arg: AreaArg) -> Option<Area> {
    match arg {
        AreaArg::LecturaCritica => Some(Area::LecturaCritica),
        AreaArg::Matematicas => Some(Area::Matematicas),
        AreaArg::SocialesCiudadanas => Some(Area::SocialesCiudadanas),
        AreaArg::CienciasNaturales => Some(Area::CienciasNaturales),
        AreaArg::Ingles => Some(Area::Ingles),
        AreaArg::All => None,
    }
}

fn render_page(
    kind: PageKind,
    bundle: &DataBundle,
    out: &Path,
    area: Option<Area>,
) -> Result<(), PageError> {
    let layout = kind.layout();
    let backend = JsonFileBackend::new(out.join(kind.name()));
    let mut session = RenderSession::new(&layout, backend);

    match kind {
        PageKind::Overview => pages::overview::render_overview(&mut session, bundle)?,
        PageKind::Areas => {
            let mut page = AreasPage::new();
            match area {
                Some(area) => page.activate(&mut session, bundle, area)?,
                None => {
                    for area in ALL_AREAS {
                        page.activate(&mut session, bundle, area)?;
                    }
                }
            }
            tracing::debug!(tab = page.active().key(), "areas page left on tab");
        }
        PageKind::Highlights => pages::highlights::render_highlights(&mut session, bundle)?,
    }

    tracing::info!(
        page = kind.name(),
        charts = session.active_charts(),
        lists = session.lists_rendered(),
        "page rendered"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
