//! Host document abstraction.
//!
//! The renderer only needs three things from a page: find an element by
//! selector, append a fragment to it, and wire clicks to the navigation
//! toggle. [`Page`] captures that; `novaflow-web` implements it over the
//! browser DOM and [`crate::memory`] implements it in memory.

use std::rc::Rc;

use crate::components::Fragment;
use crate::config::NavConfig;
use crate::error::HostError;
use crate::nav::{NavSurface, NavigationToggle};
use crate::types::Slot;

/// An element that generated fragments are appended to.
pub trait MountPoint {
    /// Appends `fragment` as the last child.
    fn append(&self, fragment: &Fragment) -> Result<(), HostError>;
}

impl<M: MountPoint + ?Sized> MountPoint for Rc<M> {
    fn append(&self, fragment: &Fragment) -> Result<(), HostError> {
        (**self).append(fragment)
    }
}

/// Slot -> optional mount handle, resolved once per render.
#[derive(Debug)]
pub struct MountRegistry<M> {
    mounts: [Option<M>; 5],
}

impl<M> MountRegistry<M> {
    /// Resolves every slot through `lookup`, in [`Slot::ALL`] order.
    pub fn resolve(mut lookup: impl FnMut(Slot) -> Option<M>) -> Self {
        Self {
            mounts: Slot::ALL.map(&mut lookup),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&M> {
        self.mounts[slot.position()].as_ref()
    }

    /// Slots that resolved to a mount.
    pub fn present(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL.into_iter().filter(|slot| self.get(*slot).is_some())
    }
}

/// The host document.
pub trait Page {
    type Mount: MountPoint;
    type Nav: NavSurface + 'static;

    /// First element matching `selector`, if any.
    fn find_mount(&self, selector: &str) -> Option<Self::Mount>;

    /// Replaces the text of the element with `id`. Returns `false` when the
    /// element is absent.
    fn set_text_by_id(&self, id: &str, text: &str) -> bool;

    /// The menu control and drawer, when both are present.
    fn nav_surface(&self, nav: &NavConfig) -> Option<Self::Nav>;

    /// Routes control clicks and drawer-link clicks into `toggle`.
    fn listen_nav(
        &self,
        toggle: Rc<NavigationToggle<Self::Nav>>,
        nav: &NavConfig,
    ) -> Result<(), HostError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_each_slot_once() {
        let mut asked = Vec::new();
        let registry = MountRegistry::resolve(|slot| {
            asked.push(slot);
            (slot != Slot::Steps).then(|| slot.as_label())
        });

        assert_eq!(asked, Slot::ALL.to_vec());
        assert_eq!(registry.get(Slot::Faq), Some(&"faq"));
        assert_eq!(registry.get(Slot::Steps), None);
        assert_eq!(registry.present().count(), 4);
    }
}
