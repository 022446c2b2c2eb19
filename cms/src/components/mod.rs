//! Leptos components that format content records into HTML fragments.
//!
//! Each content category has one component and one [`Record`] impl that
//! renders it to a [`Fragment`]. Leptos escapes every text child and attribute
//! value, so record fields are always embedded as text, never as markup.
//!
//! # Fragment Shapes
//!
//! ```text
//! Feature      <article class="card">    icon, h3 name, description, category
//! Step         <article class="step">    badge ordinal, h3 title, description
//! UseCase      <article class="card">    eyebrow category, h3 title, description
//! Testimonial  <article class="card">    avatar + h3 name + role, quote
//! FaqEntry     <details>                 summary h3 question, answer
//! (malformed)  <div class="cms-placeholder" hidden>
//! ```

mod faq_item;
mod feature_card;
mod placeholder;
mod step_card;
mod testimonial_card;
mod use_case_card;

pub use faq_item::FaqItem;
pub use feature_card::FeatureCard;
pub use placeholder::Placeholder;
pub use step_card::StepCard;
pub use testimonial_card::TestimonialCard;
pub use use_case_card::UseCaseCard;

use serde::de::DeserializeOwned;

use crate::error::MalformedRecord;
use crate::types::Slot;

/// One rendered, escaped element ready to be appended to a mount point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    html: String,
}

impl Fragment {
    pub(crate) fn new(html: String) -> Self {
        Self { html }
    }

    /// Renders the hidden stand-in used for a record that failed to decode.
    pub fn placeholder(malformed: &MalformedRecord) -> Self {
        placeholder::render(malformed)
    }

    /// The escaped HTML of this fragment.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Tag name of the fragment's root element, e.g. `article`.
    pub fn root_tag(&self) -> Option<&str> {
        let rest = self.html.trim_start().strip_prefix('<')?;
        let end = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    }
}

/// A content record bound to its slot and formatter.
pub trait Record: DeserializeOwned + Clone + 'static {
    /// Slot this record type renders into
    const SLOT: Slot;

    /// Formats the record found at zero-based `index` of its list.
    fn format(&self, index: usize) -> Fragment;
}
