//! Browser binding for the NovaFlow marketing page.
//!
//! Loads as a WASM module next to the static page markup. On start it waits
//! for the document to be parsed, then runs [`initialize`] once: content
//! mounts are filled, the footer year is stamped and the mobile drawer is
//! wired.
//!
//! Uses the canonical model and render loop from `novaflow-cms`; this crate
//! only provides the DOM side of the [`novaflow_cms::Page`] traits.
//!
//! # Inline configuration
//!
//! A page may ship JSON blocks that override the defaults:
//!
//! ```html
//! <script type="application/json" id="novaflow-config">{"nav": {"open_class": "open"}}</script>
//! <script type="application/json" id="novaflow-content">{"faq": [...]}</script>
//! ```
//!
//! An invalid block is logged and the defaults are used instead.
//!
//! Developed by the NovaFlow web team (c)2025

mod dom;
mod ready;

use std::cell::Cell;

use anyhow::Context;
use novaflow_cms::{Content, LoadError, PageConfig};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use dom::{DomMount, DomNav, DomPage};
pub use ready::when_ready;

/// `id` of the inline page configuration block.
pub const CONFIG_ELEMENT_ID: &str = "novaflow-config";
/// `id` of the inline CMS content block.
pub const CONTENT_ELEMENT_ID: &str = "novaflow-content";

thread_local! {
    static INITIALIZED: InitGuard = const { InitGuard::new() };
}

/// Remembers whether the page has been initialized.
///
/// The guard is only armed when a run succeeds, so a run that fails before
/// touching the page can be retried.
struct InitGuard {
    done: Cell<bool>,
}

impl InitGuard {
    const fn new() -> Self {
        Self {
            done: Cell::new(false),
        }
    }

    /// Runs `init` unless an earlier run succeeded. Returns whether it ran.
    fn run<E>(&self, init: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if self.done.get() {
            return Ok(false);
        }
        init()?;
        self.done.set(true);
        Ok(true)
    }
}

/// Module entry point: panic hook, console logging, then [`initialize`] once
/// the document is ready.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Another module may have installed a logger already; keep it.
    let _ = console_log::init_with_level(log::Level::Info);

    let document = document()?;
    when_ready(&document, || {
        if let Err(err) = initialize() {
            error!(error = ?err, "page initialization failed");
        }
    })
}

/// Renders content, stamps the year and binds the drawer.
///
/// Runs at most once per page; later calls are ignored.
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    let ran = INITIALIZED.with(|guard| guard.run(initialize_page))?;
    if !ran {
        warn!("page already initialized, ignoring");
    }
    Ok(())
}

fn initialize_page() -> Result<(), JsValue> {
    let document = document()?;
    let config = load_inline(&document, CONFIG_ELEMENT_ID, PageConfig::from_json)
        .unwrap_or_default();
    let content = load_inline(&document, CONTENT_ELEMENT_ID, Content::from_json)
        .unwrap_or_else(Content::builtin);

    let year = js_sys::Date::new_0().get_full_year();
    let page = DomPage::new(document);
    let startup = novaflow_cms::initialize(&page, &config, &content, year);

    info!(
        appended = startup.summary.total_appended(),
        nav_bound = startup.nav.is_some(),
        "novaflow page ready"
    );
    Ok(())
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Parses the inline JSON block with `id`, if the page has one.
///
/// A present but invalid block is logged and treated as absent.
fn load_inline<T>(
    document: &Document,
    id: &str,
    parse: impl FnOnce(&str) -> Result<T, LoadError>,
) -> Option<T> {
    match read_inline(document, id, parse) {
        Ok(value) => value,
        Err(err) => {
            error!("ignoring inline block, using defaults: {err:#}");
            None
        }
    }
}

fn read_inline<T>(
    document: &Document,
    id: &str,
    parse: impl FnOnce(&str) -> Result<T, LoadError>,
) -> anyhow::Result<Option<T>> {
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    let value = parse(&text).with_context(|| format!("inline #{id} block is invalid"))?;
    Ok(Some(value))
}
