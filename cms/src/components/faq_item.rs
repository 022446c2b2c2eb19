//! FAQ entry - collapsible question with its answer.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::{Fragment, Record};
use crate::types::{FaqEntry, Slot};

/// A `<details>` disclosure; the question is the summary.
#[component]
pub fn FaqItem(entry: FaqEntry) -> impl IntoView {
    view! {
        <details>
            <summary>
                <h3>{entry.question}</h3>
            </summary>
            <p>{entry.answer}</p>
        </details>
    }
}

impl Record for FaqEntry {
    const SLOT: Slot = Slot::Faq;

    fn format(&self, _index: usize) -> Fragment {
        Fragment::new(view! { <FaqItem entry=self.clone() /> }.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_the_summary() {
        let entry = FaqEntry {
            question: "Is there a free trial?".into(),
            answer: "Start free with core features.".into(),
        };

        let fragment = entry.format(5);

        assert_eq!(fragment.root_tag(), Some("details"));
        assert!(fragment.html().contains("<summary><h3>Is there a free trial?</h3></summary>"));
        assert!(fragment.html().contains("<p>Start free with core features.</p>"));
    }
}
