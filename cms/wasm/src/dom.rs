//! `web-sys` implementation of the page traits.

use std::rc::Rc;

use novaflow_cms::{
    Fragment, HostError, MountPoint, NavConfig, NavEvent, NavSurface, NavigationToggle, Page,
};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Converts a thrown JS value into a [`HostError`].
pub(crate) fn js_error(operation: &'static str, err: JsValue) -> HostError {
    let message = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    HostError::new(operation, message)
}

/// The live browser document, optionally narrowed to one subtree.
pub struct DomPage {
    document: Document,
    root: Option<Element>,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            root: None,
        }
    }

    /// Restricts every lookup to descendants of `root`.
    pub fn scoped(document: Document, root: Element) -> Self {
        Self {
            document,
            root: Some(root),
        }
    }

    fn query(&self, selector: &str) -> Option<Element> {
        let found = match &self.root {
            Some(root) => root.query_selector(selector),
            None => self.document.query_selector(selector),
        };
        found.unwrap_or_else(|err| {
            warn!(selector, error = %js_error("querySelector", err), "selector rejected");
            None
        })
    }
}

impl Page for DomPage {
    type Mount = DomMount;
    type Nav = DomNav;

    fn find_mount(&self, selector: &str) -> Option<DomMount> {
        self.query(selector).map(DomMount)
    }

    fn set_text_by_id(&self, id: &str, text: &str) -> bool {
        let element = match &self.root {
            Some(_) => self.query(&format!("[id=\"{id}\"]")),
            None => self.document.get_element_by_id(id),
        };
        match element {
            Some(element) => {
                element.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }

    fn nav_surface(&self, nav: &NavConfig) -> Option<DomNav> {
        let control = self.query(&nav.menu_selector)?;
        let drawer = self.query(&nav.drawer_selector)?;
        Some(DomNav { control, drawer })
    }

    fn listen_nav(
        &self,
        toggle: Rc<NavigationToggle<DomNav>>,
        nav: &NavConfig,
    ) -> Result<(), HostError> {
        let surface = toggle.surface();

        let menu_toggle = Rc::clone(&toggle);
        let on_menu = Closure::wrap(Box::new(move || {
            menu_toggle.handle(NavEvent::MenuActivated);
        }) as Box<dyn FnMut()>);
        surface
            .control
            .add_event_listener_with_callback("click", on_menu.as_ref().unchecked_ref())
            .map_err(|err| js_error("addEventListener", err))?;
        on_menu.forget(); // Lives as long as the page

        let links = surface
            .drawer
            .query_selector_all(&nav.link_selector)
            .map_err(|err| js_error("querySelectorAll", err))?;

        for index in 0..links.length() {
            let Some(link) = links.item(index) else {
                continue;
            };
            let link_toggle = Rc::clone(&toggle);
            let on_link = Closure::wrap(Box::new(move || {
                link_toggle.handle(NavEvent::LinkActivated);
            }) as Box<dyn FnMut()>);
            link.add_event_listener_with_callback("click", on_link.as_ref().unchecked_ref())
                .map_err(|err| js_error("addEventListener", err))?;
            on_link.forget();
        }

        debug!(links = links.length(), "navigation listeners bound");
        Ok(())
    }
}

/// A mount element. Fragments are inserted as its last child.
pub struct DomMount(pub Element);

impl MountPoint for DomMount {
    fn append(&self, fragment: &Fragment) -> Result<(), HostError> {
        // Fragment markup is already escaped by the Leptos renderer.
        self.0
            .insert_adjacent_html("beforeend", fragment.html())
            .map_err(|err| js_error("insertAdjacentHTML", err))
    }
}

/// Menu control + drawer container.
pub struct DomNav {
    pub control: Element,
    pub drawer: Element,
}

impl NavSurface for DomNav {
    fn set_open_class(&self, class: &str, present: bool) -> Result<(), HostError> {
        self.drawer
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|err| js_error("classList.toggle", err))
    }

    fn set_expanded(&self, expanded: bool) -> Result<(), HostError> {
        let value = if expanded { "true" } else { "false" };
        self.control
            .set_attribute("aria-expanded", value)
            .map_err(|err| js_error("setAttribute", err))
    }
}
