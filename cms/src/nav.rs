//! Mobile navigation drawer toggle.
//!
//! Two states. The menu control flips between them; any link inside the
//! drawer forces `Closed`. Every transition is reflected on the host through a
//! [`NavSurface`]: the drawer's open class and the control's `aria-expanded`.

use std::cell::Cell;

use tracing::{debug, warn};

use crate::error::HostError;

/// Drawer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// User input the toggle reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The menu control was clicked
    MenuActivated,
    /// A link inside the drawer was clicked
    LinkActivated,
}

impl NavState {
    pub fn next(self, event: NavEvent) -> NavState {
        match (self, event) {
            (NavState::Closed, NavEvent::MenuActivated) => NavState::Open,
            (NavState::Open, NavEvent::MenuActivated) => NavState::Closed,
            (_, NavEvent::LinkActivated) => NavState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavState::Open
    }
}

/// The host elements a toggle drives.
pub trait NavSurface {
    /// Adds (`present`) or removes the open class on the drawer.
    fn set_open_class(&self, class: &str, present: bool) -> Result<(), HostError>;

    /// Writes the control's `aria-expanded` attribute.
    fn set_expanded(&self, expanded: bool) -> Result<(), HostError>;
}

/// Owns the drawer state and mirrors it onto a [`NavSurface`].
#[derive(Debug)]
pub struct NavigationToggle<S> {
    surface: S,
    open_class: String,
    state: Cell<NavState>,
}

impl<S: NavSurface> NavigationToggle<S> {
    /// Starts `Closed`. The surface is not touched until the first event.
    pub fn new(surface: S, open_class: impl Into<String>) -> Self {
        Self {
            surface,
            open_class: open_class.into(),
            state: Cell::new(NavState::Closed),
        }
    }

    pub fn state(&self) -> NavState {
        self.state.get()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Applies one event and returns the new state.
    ///
    /// Surface failures are logged; the state still advances so the next
    /// click behaves as the user expects.
    pub fn handle(&self, event: NavEvent) -> NavState {
        let next = self.state.get().next(event);
        self.state.set(next);
        debug!(?event, state = ?next, "navigation drawer transition");

        let open = next.is_open();
        if let Err(err) = self.surface.set_open_class(&self.open_class, open) {
            warn!(error = %err, "failed to update drawer class");
        }
        if let Err(err) = self.surface.set_expanded(open) {
            warn!(error = %err, "failed to update aria-expanded");
        }
        next
    }
}
