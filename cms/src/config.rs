//! Host markup addressing: where mounts, the year stamp and the drawer live.
//!
//! Defaults match the NovaFlow page. A page can override any field with a
//! JSON document; omitted fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::types::Slot;

/// Page-level selectors and identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Attribute carrying the slot label on mount points
    pub mount_attribute: String,
    /// `id` of the footer year element
    pub year_element_id: String,
    pub nav: NavConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            mount_attribute: "data-cms".into(),
            year_element_id: "year".into(),
            nav: NavConfig::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Attribute selector for a slot's mount, e.g. `[data-cms="faq"]`.
    pub fn mount_selector(&self, slot: Slot) -> String {
        format!("[{}=\"{}\"]", self.mount_attribute, slot.as_label())
    }
}

/// Mobile navigation drawer addressing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// The menu trigger control
    pub menu_selector: String,
    /// The drawer container
    pub drawer_selector: String,
    /// Links inside the drawer that close it
    pub link_selector: String,
    /// Class present on the drawer while open
    pub open_class: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_selector: ".nav__menu".into(),
            drawer_selector: "[data-mobile-drawer]".into(),
            link_selector: "a".into(),
            open_class: "is-open".into(),
        }
    }
}
