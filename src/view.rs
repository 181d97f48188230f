//! Root view state: the selected planet and the active view mode.
//!
//! [`ViewState`] is the only state shared between views. Views never mutate
//! it directly; they write [`SelectPlanet`] and [`SetViewMode`] messages that
//! [`apply_view_requests`] folds into the state once per frame.

use bevy::prelude::*;

use crate::catalog::{Catalog, Planet};
use crate::types::{SelectionOrigin, ViewMode, ViewSystemSet};

/// Planet shown when the viewer starts.
pub const DEFAULT_PLANET_ID: &str = "earth";

/// Request to select a planet.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct SelectPlanet {
    pub id: String,
    pub origin: SelectionOrigin,
}

/// Request to switch between detail and overview.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SetViewMode(pub ViewMode);

/// Selected planet and active view mode.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ViewState {
    pub selected_planet_id: String,
    pub view_mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_planet_id: DEFAULT_PLANET_ID.to_string(),
            view_mode: ViewMode::Detail,
        }
    }
}

impl ViewState {
    /// Select a planet. Returns whether the selection changed.
    pub fn select_planet(&mut self, id: &str) -> bool {
        if self.selected_planet_id == id {
            return false;
        }
        self.selected_planet_id = id.to_string();
        true
    }

    /// Switch the view mode. Returns whether the mode changed.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        true
    }

    /// Apply a selection request, including the overview's switch back to detail.
    pub fn apply_selection(&mut self, request: &SelectPlanet) -> bool {
        let mut changed = self.select_planet(&request.id);
        if request.origin == SelectionOrigin::Overview {
            changed |= self.set_view_mode(ViewMode::Detail);
        }
        changed
    }

    /// The planet to display; unknown ids resolve to the catalog default.
    pub fn active_planet<'a>(&self, catalog: &'a Catalog) -> Option<&'a Planet> {
        catalog.resolve(&self.selected_planet_id)
    }

    pub fn is_detail(&self) -> bool {
        self.view_mode == ViewMode::Detail
    }
}

/// Run condition: the detail view is shown.
pub fn in_detail(view: Res<ViewState>) -> bool {
    view.is_detail()
}

/// Run condition: the overview is shown.
pub fn in_overview(view: Res<ViewState>) -> bool {
    !view.is_detail()
}

/// Plugin owning the root view state and its request messages.
pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Catalog>()
            .init_resource::<ViewState>()
            .add_message::<SelectPlanet>()
            .add_message::<SetViewMode>()
            .configure_sets(
                Update,
                (
                    ViewSystemSet::Input,
                    ViewSystemSet::ApplyRequests,
                    ViewSystemSet::Mount,
                    ViewSystemSet::Animate,
                )
                    .chain(),
            )
            .add_systems(Update, apply_view_requests.in_set(ViewSystemSet::ApplyRequests));
    }
}

/// Fold pending requests into [`ViewState`].
///
/// Mode changes are applied before selections so that an overview selection
/// written in the same frame as a mode toggle always ends in detail mode.
/// Change detection only fires when something actually changed.
pub fn apply_view_requests(
    mut mode_requests: MessageReader<SetViewMode>,
    mut select_requests: MessageReader<SelectPlanet>,
    mut state: ResMut<ViewState>,
) {
    for SetViewMode(mode) in mode_requests.read() {
        if state.bypass_change_detection().set_view_mode(*mode) {
            state.set_changed();
            info!("View mode: {:?}", mode);
        }
    }

    for request in select_requests.read() {
        if state.bypass_change_detection().apply_selection(request) {
            state.set_changed();
            info!("Selected planet '{}' from {:?}", request.id, request.origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_earth_in_detail() {
        let state = ViewState::default();
        assert_eq!(state.selected_planet_id, "earth");
        assert_eq!(state.view_mode, ViewMode::Detail);
    }

    #[test]
    fn mutators_are_idempotent() {
        let mut state = ViewState::default();
        assert!(state.select_planet("mars"));
        assert!(!state.select_planet("mars"));
        assert!(state.set_view_mode(ViewMode::Overview));
        assert!(!state.set_view_mode(ViewMode::Overview));
    }

    #[test]
    fn overview_selection_forces_detail() {
        let mut state = ViewState {
            selected_planet_id: "mars".into(),
            view_mode: ViewMode::Overview,
        };
        // Same planet, only the mode changes.
        assert!(state.apply_selection(&SelectPlanet {
            id: "mars".into(),
            origin: SelectionOrigin::Overview,
        }));
        assert_eq!(state.view_mode, ViewMode::Detail);
    }

    #[test]
    fn selector_bar_selection_keeps_mode() {
        let mut state = ViewState::default();
        state.apply_selection(&SelectPlanet {
            id: "venus".into(),
            origin: SelectionOrigin::SelectorBar,
        });
        assert_eq!(state.selected_planet_id, "venus");
        assert_eq!(state.view_mode, ViewMode::Detail);
    }

    #[test]
    fn unknown_selection_resolves_to_default_planet() {
        let catalog = Catalog::default();
        let mut state = ViewState::default();
        state.select_planet("nibiru");
        assert_eq!(state.active_planet(&catalog).map(|p| p.id), Some("earth"));
    }
}
