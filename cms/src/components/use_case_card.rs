use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::{Fragment, Record};
use crate::types::{Slot, UseCase};

#[component]
pub fn UseCaseCard(use_case: UseCase) -> impl IntoView {
    view! {
        <article class="card">
            <p class="eyebrow">{use_case.category}</p>
            <h3>{use_case.title}</h3>
            <p class="card__meta">{use_case.description}</p>
        </article>
    }
}

impl Record for UseCase {
    const SLOT: Slot = Slot::UseCases;

    fn format(&self, _index: usize) -> Fragment {
        Fragment::new(view! { <UseCaseCard use_case=self.clone() /> }.to_html())
    }
}
