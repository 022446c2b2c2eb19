//! In-memory host.
//!
//! Renders into plain fragment lists instead of a browser document. Used by
//! the test suite and for pre-rendering slot markup outside the browser.
//!
//! ```rust
//! use novaflow_cms::memory::MemoryPage;
//! use novaflow_cms::{initialize, Content, PageConfig, Slot};
//!
//! let config = PageConfig::default();
//! let page = MemoryPage::new().with_slot(&config, Slot::Faq);
//!
//! initialize(&page, &config, &Content::builtin(), 2025);
//!
//! let faq = page.mount(&config.mount_selector(Slot::Faq)).unwrap();
//! assert_eq!(faq.len(), 6);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::components::Fragment;
use crate::config::{NavConfig, PageConfig};
use crate::error::HostError;
use crate::host::{MountPoint, Page};
use crate::nav::{NavEvent, NavState, NavSurface, NavigationToggle};
use crate::types::Slot;

/// A mount that keeps appended fragments in order.
#[derive(Debug, Default)]
pub struct MemoryMount {
    children: RefCell<Vec<Fragment>>,
}

impl MemoryMount {
    pub fn children(&self) -> Vec<Fragment> {
        self.children.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Concatenated markup of all children.
    pub fn inner_html(&self) -> String {
        self.children
            .borrow()
            .iter()
            .map(Fragment::html)
            .collect()
    }
}

impl MountPoint for MemoryMount {
    fn append(&self, fragment: &Fragment) -> Result<(), HostError> {
        self.children.borrow_mut().push(fragment.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct NavElements {
    drawer_classes: RefCell<BTreeSet<String>>,
    aria_expanded: RefCell<Option<String>>,
}

/// Menu control + drawer pair. Clones share the same elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryNav {
    elements: Rc<NavElements>,
}

impl MemoryNav {
    pub fn drawer_has_class(&self, class: &str) -> bool {
        self.elements.drawer_classes.borrow().contains(class)
    }

    /// Current `aria-expanded` value of the control, if ever set.
    pub fn aria_expanded(&self) -> Option<String> {
        self.elements.aria_expanded.borrow().clone()
    }
}

impl NavSurface for MemoryNav {
    fn set_open_class(&self, class: &str, present: bool) -> Result<(), HostError> {
        let mut classes = self.elements.drawer_classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn set_expanded(&self, expanded: bool) -> Result<(), HostError> {
        *self.elements.aria_expanded.borrow_mut() = Some(expanded.to_string());
        Ok(())
    }
}

/// Menu control and drawer as addressed on the page.
struct NavSlot {
    menu_selector: String,
    drawer_selector: String,
    links: usize,
    elements: MemoryNav,
}

/// A page made of named mounts, an optional year element and an optional
/// navigation drawer with `links` anchors.
///
/// Every element is stored under the id or selector it answers to; lookups
/// with any other address miss, as they would in a document.
#[derive(Default)]
pub struct MemoryPage {
    mounts: BTreeMap<String, Rc<MemoryMount>>,
    year: Option<(String, RefCell<String>)>,
    nav: Option<NavSlot>,
    toggle: RefCell<Option<Rc<NavigationToggle<MemoryNav>>>>,
    lookups: Cell<usize>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty mount matched by `selector`.
    pub fn with_mount(mut self, selector: impl Into<String>) -> Self {
        self.mounts.insert(selector.into(), Rc::default());
        self
    }

    /// Adds the mount for `slot` as addressed by `config`.
    pub fn with_slot(self, config: &PageConfig, slot: Slot) -> Self {
        let selector = config.mount_selector(slot);
        self.with_mount(selector)
    }

    pub fn with_all_slots(self, config: &PageConfig) -> Self {
        Slot::ALL
            .into_iter()
            .fold(self, |page, slot| page.with_slot(config, slot))
    }

    /// Adds an empty element with the given `id` for the footer year.
    pub fn with_year_element(mut self, id: impl Into<String>) -> Self {
        self.year = Some((id.into(), RefCell::new(String::new())));
        self
    }

    /// Adds the menu control matched by `menu_selector` and a drawer matched
    /// by `drawer_selector` holding `links` anchors.
    pub fn with_nav(
        mut self,
        menu_selector: impl Into<String>,
        drawer_selector: impl Into<String>,
        links: usize,
    ) -> Self {
        self.nav = Some(NavSlot {
            menu_selector: menu_selector.into(),
            drawer_selector: drawer_selector.into(),
            links,
            elements: MemoryNav::default(),
        });
        self
    }

    /// Adds the control and drawer where `nav` expects them.
    pub fn with_configured_nav(self, nav: &NavConfig, links: usize) -> Self {
        self.with_nav(&nav.menu_selector, &nav.drawer_selector, links)
    }

    pub fn mount(&self, selector: &str) -> Option<Rc<MemoryMount>> {
        self.mounts.get(selector).cloned()
    }

    /// Total children across every mount.
    pub fn total_children(&self) -> usize {
        self.mounts.values().map(|mount| mount.len()).sum()
    }

    pub fn year_text(&self) -> Option<String> {
        self.year.as_ref().map(|(_, text)| text.borrow().clone())
    }

    pub fn nav(&self) -> Option<&MemoryNav> {
        self.nav.as_ref().map(|slot| &slot.elements)
    }

    /// Number of `find_mount` calls served.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    /// Clicks the menu control. Returns the new state, or `None` when nothing
    /// is listening.
    pub fn click_menu(&self) -> Option<NavState> {
        let toggle = self.toggle.borrow().clone()?;
        Some(toggle.handle(NavEvent::MenuActivated))
    }

    /// Clicks the drawer link at `index`. Returns `None` when there is no such
    /// link or nothing is listening.
    pub fn click_link(&self, index: usize) -> Option<NavState> {
        if index >= self.nav.as_ref().map_or(0, |slot| slot.links) {
            return None;
        }
        let toggle = self.toggle.borrow().clone()?;
        Some(toggle.handle(NavEvent::LinkActivated))
    }
}

impl Page for MemoryPage {
    type Mount = Rc<MemoryMount>;
    type Nav = MemoryNav;

    fn find_mount(&self, selector: &str) -> Option<Self::Mount> {
        self.lookups.set(self.lookups.get() + 1);
        self.mount(selector)
    }

    fn set_text_by_id(&self, id: &str, text: &str) -> bool {
        match &self.year {
            Some((year_id, slot)) if year_id == id => {
                *slot.borrow_mut() = text.to_string();
                true
            }
            _ => false,
        }
    }

    fn nav_surface(&self, nav: &NavConfig) -> Option<Self::Nav> {
        let slot = self.nav.as_ref()?;
        (slot.menu_selector == nav.menu_selector && slot.drawer_selector == nav.drawer_selector)
            .then(|| slot.elements.clone())
    }

    fn listen_nav(
        &self,
        toggle: Rc<NavigationToggle<Self::Nav>>,
        _nav: &NavConfig,
    ) -> Result<(), HostError> {
        *self.toggle.borrow_mut() = Some(toggle);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_keeps_append_order() {
        let mount = MemoryMount::default();
        mount.append(&Fragment::new("<p>a</p>".into())).unwrap();
        mount.append(&Fragment::new("<p>b</p>".into())).unwrap();

        assert_eq!(mount.len(), 2);
        assert_eq!(mount.inner_html(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn clicks_without_listener_do_nothing() {
        let page = MemoryPage::new().with_nav(".nav__menu", "[data-mobile-drawer]", 2);
        assert_eq!(page.click_menu(), None);
        assert_eq!(page.click_link(0), None);
    }

    #[test]
    fn year_element_answers_only_to_its_id() {
        let page = MemoryPage::new().with_year_element("year");

        assert!(!page.set_text_by_id("copyright", "2025"));
        assert_eq!(page.year_text().as_deref(), Some(""));

        assert!(page.set_text_by_id("year", "2025"));
        assert_eq!(page.year_text().as_deref(), Some("2025"));
    }

    #[test]
    fn nav_needs_both_selectors_to_match() {
        let page = MemoryPage::new().with_nav(".nav__menu", "[data-mobile-drawer]", 1);
        let mut nav = NavConfig::default();
        assert!(page.nav_surface(&nav).is_some());

        nav.drawer_selector = "#drawer".into();
        assert!(page.nav_surface(&nav).is_none());

        let nav = NavConfig {
            menu_selector: ".menu".into(),
            ..NavConfig::default()
        };
        assert!(page.nav_surface(&nav).is_none());
    }

    #[test]
    fn nav_clones_share_elements() {
        let nav = MemoryNav::default();
        let other = nav.clone();
        nav.set_open_class("is-open", true).unwrap();
        assert!(other.drawer_has_class("is-open"));
    }
}
