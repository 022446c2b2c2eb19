use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use super::Fragment;
use crate::error::MalformedRecord;

/// Hidden stand-in for a record that could not be rendered.
///
/// Keeps the mount's child count equal to its record count; the reason is
/// left in `data-cms-error` for whoever inspects the page.
#[component]
pub fn Placeholder(reason: String) -> impl IntoView {
    view! { <div class="cms-placeholder" hidden=true aria-hidden="true" data-cms-error=reason></div> }
}

pub(super) fn render(malformed: &MalformedRecord) -> Fragment {
    let reason = malformed.to_string();
    Fragment::new(view! { <Placeholder reason=reason /> }.to_html())
}
