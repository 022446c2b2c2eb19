//! # novaflow-cms
//!
//! Content blocks and the mobile navigation drawer for the NovaFlow marketing
//! page.
//!
//! The page's static markup carries empty mount points
//! (`<div data-cms="features">`). At startup this crate fills each one from a
//! list of records, one escaped fragment per record, stamps the footer year,
//! and wires the navigation drawer toggle.
//!
//! ## Architecture
//!
//! - [`types`] - Record shapes and the five [`Slot`]s
//! - [`content`] - Per-slot collections, built-in copy, CMS JSON loading
//! - [`components`] - Leptos components, one formatter per category
//! - [`host`] - [`Page`] / [`MountPoint`] traits and the [`MountRegistry`]
//! - [`render`] - The render loop and its [`RenderSummary`]
//! - [`nav`] - Drawer state machine and [`NavigationToggle`]
//! - [`memory`] - In-memory host for tests and pre-rendering
//!
//! The browser binding lives in the `novaflow-web` crate.
//!
//! ## Leptos 0.8 SSR
//!
//! Formatters are rendered with Leptos' `RenderHtml` trait, which escapes
//! text children and attribute values:
//!
//! ```rust
//! use novaflow_cms::components::Record;
//! use novaflow_cms::types::FaqEntry;
//!
//! let entry = FaqEntry {
//!     question: "Is <b>this</b> safe?".into(),
//!     answer: "Yes.".into(),
//! };
//! let html = entry.format(0).into_html();
//! assert!(html.contains("&lt;b&gt;this&lt;/b&gt;"));
//! ```
//!
//! ---
//!
//! Developed by the NovaFlow web team (c)2025

pub mod components;
pub mod config;
pub mod content;
mod data;
pub mod error;
pub mod host;
pub mod memory;
pub mod nav;
pub mod render;
mod startup;
pub mod types;

pub use components::{Fragment, Record};
pub use config::{NavConfig, PageConfig};
pub use content::{Collection, Content};
pub use error::{HostError, LoadError, MalformedRecord};
pub use host::{MountPoint, MountRegistry, Page};
pub use nav::{NavEvent, NavState, NavSurface, NavigationToggle};
pub use render::{RenderSummary, SlotOutcome, render};
pub use startup::{Startup, initialize, year_text};
pub use types::Slot;
