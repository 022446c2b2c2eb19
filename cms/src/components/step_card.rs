//! Step card - numbered stage of the onboarding flow.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::{Fragment, Record};
use crate::types::{Slot, Step};

/// Card for one step. `ordinal` is 1-based.
#[component]
pub fn StepCard(step: Step, ordinal: usize) -> impl IntoView {
    view! {
        <article class="step">
            <div class="step__badge" aria-hidden="true">{ordinal}</div>
            <h3>{step.title}</h3>
            <p class="card__meta">{step.description}</p>
        </article>
    }
}

impl Record for Step {
    const SLOT: Slot = Slot::Steps;

    fn format(&self, index: usize) -> Fragment {
        let ordinal = index + 1;
        Fragment::new(view! { <StepCard step=self.clone() ordinal=ordinal /> }.to_html())
    }
}
