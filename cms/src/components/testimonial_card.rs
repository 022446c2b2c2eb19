//! Testimonial card - avatar, attribution and quote.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::{Fragment, Record};
use crate::types::{Slot, Testimonial};

/// Card for one customer quote.
///
/// The avatar URL lands in an attribute and the name is reused for its alt
/// text; both go through attribute escaping.
#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let alt = format!("Avatar of {}", testimonial.name);
    let byline = format!("{} · {}", testimonial.role, testimonial.company);
    let quote = format!("\u{201c}{}\u{201d}", testimonial.quote);
    let avatar = testimonial.avatar;

    view! {
        <article class="card">
            <div class="testimonial__head">
                <img src=avatar alt=alt />
                <div>
                    <h3>{testimonial.name}</h3>
                    <p class="card__meta">{byline}</p>
                </div>
            </div>
            <p class="card__meta">{quote}</p>
        </article>
    }
}

impl Record for Testimonial {
    const SLOT: Slot = Slot::Testimonials;

    fn format(&self, _index: usize) -> Fragment {
        Fragment::new(view! { <TestimonialCard testimonial=self.clone() /> }.to_html())
    }
}
