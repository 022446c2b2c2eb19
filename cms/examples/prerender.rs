//! Pre-render every content slot to static HTML.
//!
//! Run with: `cargo run --example prerender [content.json]`

use novaflow_cms::memory::MemoryPage;
use novaflow_cms::{Content, PageConfig, Slot, initialize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let content = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).expect("Failed to read content file");
            Content::from_json(&json).expect("Failed to load content")
        }
        None => Content::builtin(),
    };

    let config = PageConfig::default();
    let page = MemoryPage::new().with_all_slots(&config);
    let startup = initialize(&page, &config, &content, 2025);

    for slot in Slot::ALL {
        let Some(mount) = page.mount(&config.mount_selector(slot)) else {
            continue;
        };
        println!("<!-- {slot}: {} fragments -->", startup.summary.appended(slot));
        println!("<div {}=\"{slot}\">{}</div>", config.mount_attribute, mount.inner_html());
    }
}
