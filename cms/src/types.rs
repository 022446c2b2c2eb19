//! Content data types for the marketing page blocks.
//!
//! Every record is a flat, immutable value. Fields are all required: a record
//! that arrives without one of them never reaches a formatter (see
//! [`crate::content::Collection`]).
//!
//! # Example
//!
//! ```rust
//! use novaflow_cms::types::{Feature, Slot};
//!
//! let feature = Feature {
//!     name: "Adaptive Workflows".into(),
//!     description: "AI routes tasks based on context.".into(),
//!     icon: "⚡".into(),
//!     category: "Automation".into(),
//! };
//!
//! assert_eq!(Slot::Features.as_label(), "features");
//! assert_eq!(feature.category, "Automation");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical mount slot for one content category.
///
/// The label is what host markup puts in its mount attribute, e.g.
/// `<div data-cms="usecases">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Feature cards
    Features,
    /// Numbered "how it works" steps
    Steps,
    /// Audience use cases
    UseCases,
    /// Customer quotes
    Testimonials,
    /// Question/answer pairs
    Faq,
}

impl Slot {
    /// All slots, in render order.
    pub const ALL: [Slot; 5] = [
        Slot::Features,
        Slot::Steps,
        Slot::UseCases,
        Slot::Testimonials,
        Slot::Faq,
    ];

    /// Returns the label used in host markup and CMS documents.
    pub fn as_label(&self) -> &'static str {
        match self {
            Slot::Features => "features",
            Slot::Steps => "steps",
            Slot::UseCases => "usecases",
            Slot::Testimonials => "testimonials",
            Slot::Faq => "faq",
        }
    }

    /// Parses a markup label back into a slot.
    pub fn from_label(label: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| slot.as_label() == label)
    }

    pub(crate) fn position(&self) -> usize {
        match self {
            Slot::Features => 0,
            Slot::Steps => 1,
            Slot::UseCases => 2,
            Slot::Testimonials => 3,
            Slot::Faq => 4,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A product feature card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Card heading
    pub name: String,
    /// One-sentence pitch
    pub description: String,
    /// Decorative glyph (usually a single emoji)
    pub icon: String,
    /// Category label shown under the description
    pub category: String,
}

/// One step of the onboarding flow. Its ordinal comes from its position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

/// A use case aimed at one audience.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    pub title: String,
    pub description: String,
    /// Eyebrow label above the title
    pub category: String,
}

/// A customer quote with attribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    /// Quote text without surrounding quotation marks
    pub quote: String,
    /// Avatar image URL
    pub avatar: String,
}

/// A frequently asked question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
