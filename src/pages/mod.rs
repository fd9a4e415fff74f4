pub mod areas;
pub mod highlights;
pub mod overview;

use std::collections::BTreeSet;

use crate::chart::session::RenderError;
use crate::input::InputError;
use crate::model::areas::ALL_AREAS;

/// Page kind, chosen once at startup. There are no transitions between
/// kinds within a run; the only in-page transition is the areas tab switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Overview,
    Areas,
    Highlights,
}

pub const ALL_PAGES: [PageKind; 3] = [PageKind::Overview, PageKind::Areas, PageKind::Highlights];

impl PageKind {
    pub fn name(self) -> &'static str {
        match self {
            PageKind::Overview => "overview",
            PageKind::Areas => "areas",
            PageKind::Highlights => "highlights",
        }
    }

    /// The surfaces and list containers this page's host document offers.
    /// Renderers targeting anything else are no-ops.
    pub fn layout(self) -> PageLayout {
        let mut layout = PageLayout::default();
        match self {
            PageKind::Overview => {
                layout.add_surface("promedioGlobalChart");
                layout.add_surface("comparativaHorizonteChart");
            }
            PageKind::Areas => {
                for area in ALL_AREAS {
                    layout.add_surface(&areas::trend_surface(area));
                    layout.add_surface(&areas::radar_surface(area));
                }
            }
            PageKind::Highlights => {
                layout.add_list("top-general-list");
                for area in ALL_AREAS {
                    layout.add_list(&highlights::area_list_container(area));
                }
            }
        }
        layout
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    surfaces: BTreeSet<String>,
    lists: BTreeSet<String>,
}

impl PageLayout {
    pub fn add_surface(&mut self, name: &str) {
        self.surfaces.insert(name.to_string());
    }

    pub fn add_list(&mut self, name: &str) {
        self.lists.insert(name.to_string());
    }

    pub fn has_surface(&self, name: &str) -> bool {
        self.surfaces.contains(name)
    }

    pub fn has_list(&self, name: &str) -> bool {
        self.lists.contains(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
#[path = "../../tests/src_inline/pages/tests.rs"]
mod tests;
