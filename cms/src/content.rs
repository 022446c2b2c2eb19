//! Content collections and CMS document loading.
//!
//! A [`Content`] holds one [`Collection`] per slot. Collections keep every
//! entry in its original position, including entries that failed to decode,
//! so a renderer can keep sibling order and counts stable.
//!
//! # CMS Documents
//!
//! ```json
//! {
//!   "features": [{ "name": "...", "description": "...", "icon": "⚡", "category": "..." }],
//!   "steps": [{ "title": "...", "description": "..." }],
//!   "faq": []
//! }
//! ```
//!
//! Keys are slot labels. A missing key means an empty category.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::components::Record;
use crate::data;
use crate::error::{LoadError, MalformedRecord};
use crate::types::{FaqEntry, Feature, Slot, Step, Testimonial, UseCase};

/// A decoded record, or the reason it could not be decoded.
pub type Entry<T> = Result<T, MalformedRecord>;

/// Ordered records for one slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Wraps already-typed records; every entry is valid.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            entries: records.into_iter().map(Ok).collect(),
        }
    }

    /// Decodes each JSON value on its own so one bad item cannot poison the rest.
    pub fn from_values(values: Vec<Value>) -> Self {
        let entries = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<T>(value).map_err(|err| MalformedRecord {
                    slot: T::SLOT,
                    index,
                    reason: err.to_string(),
                })
            })
            .collect();
        Self { entries }
    }

    pub fn slot(&self) -> Slot {
        T::SLOT
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Valid records, in order.
    pub fn records(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(|entry| entry.as_ref().ok())
    }

    /// Entries that failed to decode, in order.
    pub fn malformed(&self) -> impl Iterator<Item = &MalformedRecord> {
        self.entries.iter().filter_map(|entry| entry.as_ref().err())
    }
}

/// Every content category of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Content {
    pub features: Collection<Feature>,
    pub steps: Collection<Step>,
    pub use_cases: Collection<UseCase>,
    pub testimonials: Collection<Testimonial>,
    pub faq: Collection<FaqEntry>,
}

impl Content {
    /// The NovaFlow reference copy shipped with the page.
    pub fn builtin() -> Self {
        Self {
            features: Collection::from_records(data::features()),
            steps: Collection::from_records(data::steps()),
            use_cases: Collection::from_records(data::use_cases()),
            testimonials: Collection::from_records(data::testimonials()),
            faq: Collection::from_records(data::faq_entries()),
        }
    }

    /// Loads a CMS document.
    ///
    /// Only a document that is not a JSON object fails as a whole. A category
    /// that is not a list is logged and left empty; a bad record becomes a
    /// [`MalformedRecord`] entry.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let mut map = match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => map,
            other => {
                return Err(LoadError::NotAnObject {
                    found: json_type(&other),
                });
            }
        };

        let content = Self {
            features: take_collection(&mut map),
            steps: take_collection(&mut map),
            use_cases: take_collection(&mut map),
            testimonials: take_collection(&mut map),
            faq: take_collection(&mut map),
        };

        for key in map.keys() {
            debug!(key = %key, "ignoring unknown content key");
        }

        Ok(content)
    }

    /// Number of entries (valid or not) for a slot.
    pub fn len(&self, slot: Slot) -> usize {
        match slot {
            Slot::Features => self.features.len(),
            Slot::Steps => self.steps.len(),
            Slot::UseCases => self.use_cases.len(),
            Slot::Testimonials => self.testimonials.len(),
            Slot::Faq => self.faq.len(),
        }
    }

    pub fn malformed_count(&self) -> usize {
        self.features.malformed().count()
            + self.steps.malformed().count()
            + self.use_cases.malformed().count()
            + self.testimonials.malformed().count()
            + self.faq.malformed().count()
    }
}

fn take_collection<T: Record>(map: &mut Map<String, Value>) -> Collection<T> {
    match map.remove(T::SLOT.as_label()) {
        None => Collection::default(),
        Some(Value::Array(items)) => Collection::from_values(items),
        Some(other) => {
            warn!(
                slot = %T::SLOT,
                found = json_type(&other),
                "content category is not a list, leaving it empty"
            );
            Collection::default()
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_is_fully_valid() {
        let content = Content::builtin();

        assert_eq!(content.len(Slot::Features), 4);
        assert_eq!(content.len(Slot::Steps), 3);
        assert_eq!(content.len(Slot::UseCases), 4);
        assert_eq!(content.len(Slot::Testimonials), 3);
        assert_eq!(content.len(Slot::Faq), 6);
        assert_eq!(content.malformed_count(), 0);
    }

    #[test]
    fn missing_keys_are_empty_categories() {
        let content = Content::from_json(r#"{"steps":[{"title":"Ship","description":"Go"}]}"#)
            .unwrap();

        assert_eq!(content.len(Slot::Steps), 1);
        assert!(content.features.is_empty());
        assert!(content.faq.is_empty());
    }

    #[test]
    fn bad_record_is_isolated_in_place() {
        let json = r#"{
            "faq": [
                {"question": "One?", "answer": "Yes."},
                {"question": "Two?"},
                {"question": "Three?", "answer": "Also yes."}
            ]
        }"#;

        let content = Content::from_json(json).unwrap();
        let entries = content.faq.entries();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].is_ok());
        assert!(entries[2].is_ok());

        let bad = entries[1].as_ref().unwrap_err();
        assert_eq!(bad.slot, Slot::Faq);
        assert_eq!(bad.index, 1);
        assert!(bad.reason.contains("answer"));

        let questions: Vec<&str> = content.faq.records().map(|r| r.question.as_str()).collect();
        assert_eq!(questions, vec!["One?", "Three?"]);
    }

    #[test]
    fn wrong_field_type_is_malformed() {
        let json = r#"{"steps":[{"title": 3, "description": "x"}]}"#;
        let content = Content::from_json(json).unwrap();
        assert_eq!(content.steps.malformed().count(), 1);
    }

    #[test]
    fn non_list_category_does_not_block_others() {
        let json = r#"{
            "features": "oops",
            "usecases": [{"title": "Ops", "description": "Reduce toil.", "category": "Operations"}]
        }"#;

        let content = Content::from_json(json).unwrap();

        assert!(content.features.is_empty());
        assert_eq!(content.len(Slot::UseCases), 1);
    }

    #[test]
    fn top_level_must_be_an_object() {
        let err = Content::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { found: "an array" }));

        let err = Content::from_json("not json").unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson(_)));
    }

    #[test]
    fn collection_reports_its_slot() {
        let content = Content::builtin();
        assert_eq!(content.testimonials.slot(), Slot::Testimonials);
        assert_eq!(content.use_cases.slot(), Slot::UseCases);
    }
}
