//! One-shot page startup: render content, stamp the year, bind the drawer.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::config::{NavConfig, PageConfig};
use crate::content::Content;
use crate::host::{MountRegistry, Page};
use crate::nav::NavigationToggle;
use crate::render::{RenderSummary, render};

/// What [`initialize`] did to the page.
pub struct Startup<N> {
    pub summary: RenderSummary,
    /// Whether a year element was found and filled
    pub year_stamped: bool,
    /// The bound toggle, when the page has both a menu control and a drawer
    pub nav: Option<Rc<NavigationToggle<N>>>,
}

/// Four-digit year text for the footer stamp.
pub fn year_text(year: u32) -> String {
    format!("{year:04}")
}

/// Runs the whole startup sequence against `page`.
///
/// Call once, after the host document is ready. `year` is the current
/// calendar year as read from the host clock.
pub fn initialize<P: Page>(
    page: &P,
    config: &PageConfig,
    content: &Content,
    year: u32,
) -> Startup<P::Nav> {
    let registry = MountRegistry::resolve(|slot| page.find_mount(&config.mount_selector(slot)));
    let summary = render(&registry, content);

    let year_stamped = page.set_text_by_id(&config.year_element_id, &year_text(year));
    if !year_stamped {
        debug!(id = %config.year_element_id, "no year element");
    }

    let nav = bind_navigation(page, &config.nav);

    info!(
        appended = summary.total_appended(),
        year_stamped,
        nav_bound = nav.is_some(),
        "page initialized"
    );
    Startup {
        summary,
        year_stamped,
        nav,
    }
}

fn bind_navigation<P: Page>(page: &P, nav: &NavConfig) -> Option<Rc<NavigationToggle<P::Nav>>> {
    let Some(surface) = page.nav_surface(nav) else {
        debug!("menu control or drawer missing, navigation not bound");
        return None;
    };

    let toggle = Rc::new(NavigationToggle::new(surface, nav.open_class.clone()));
    if let Err(err) = page.listen_nav(Rc::clone(&toggle), nav) {
        warn!(error = %err, "failed to bind navigation listeners");
    }
    Some(toggle)
}
