//! Feature card - icon, name, pitch and category label.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::{Fragment, Record};
use crate::types::{Feature, Slot};

/// Card for one product feature.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    let category = format!("Category: {}", feature.category);

    view! {
        <article class="card">
            <div class="card__icon" aria-hidden="true">{feature.icon}</div>
            <h3>{feature.name}</h3>
            <p class="card__meta">{feature.description}</p>
            <p class="card__meta">{category}</p>
        </article>
    }
}

impl Record for Feature {
    const SLOT: Slot = Slot::Features;

    fn format(&self, _index: usize) -> Fragment {
        Fragment::new(view! { <FeatureCard feature=self.clone() /> }.to_html())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature() -> Feature {
        Feature {
            name: "Team Insights".into(),
            description: "Live timelines and health scores.".into(),
            icon: "📊".into(),
            category: "Visibility".into(),
        }
    }

    #[test]
    fn renders_article_with_name_heading() {
        let fragment = feature().format(0);

        assert_eq!(fragment.root_tag(), Some("article"));
        assert!(fragment.html().contains("<h3>Team Insights</h3>"));
        assert!(fragment.html().contains("Live timelines and health scores."));
        assert!(fragment.html().contains("Category: Visibility"));
        assert!(fragment.html().contains("📊"));
    }

    #[test]
    fn escapes_markup_in_fields() {
        let mut hostile = feature();
        hostile.name = "<script>alert(1)</script>".into();
        hostile.category = "A & B".into();

        let html = hostile.format(0).into_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
    }
}
