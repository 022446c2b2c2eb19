//! End-to-end startup against the in-memory page.

use novaflow_cms::memory::MemoryPage;
use novaflow_cms::types::Feature;
use novaflow_cms::{
    Collection, Content, NavState, Page, PageConfig, Slot, SlotOutcome, initialize,
};
use pretty_assertions::assert_eq;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn full_page(config: &PageConfig) -> MemoryPage {
    MemoryPage::new()
        .with_all_slots(config)
        .with_year_element(&config.year_element_id)
        .with_configured_nav(&config.nav, 3)
}

#[test]
fn every_mounted_slot_gets_one_child_per_record() {
    init_tracing();
    let config = PageConfig::default();
    let page = full_page(&config);
    let content = Content::builtin();

    let startup = initialize(&page, &config, &content, 2025);

    for slot in Slot::ALL {
        let mount = page.mount(&config.mount_selector(slot)).unwrap();
        assert_eq!(mount.len(), content.len(slot), "slot {slot}");
        assert_eq!(startup.summary.appended(slot), content.len(slot));
    }
}

#[test]
fn four_features_become_four_articles() {
    let config = PageConfig::default();
    let page = MemoryPage::new().with_slot(&config, Slot::Features);
    let features = vec![
        ("Alpha", "First feature."),
        ("Beta", "Second feature."),
        ("Gamma", "Third feature."),
        ("Delta", "Fourth feature."),
    ];
    let content = Content {
        features: Collection::from_records(features.iter().map(|(name, description)| Feature {
            name: name.to_string(),
            description: description.to_string(),
            icon: "*".into(),
            category: "Test".into(),
        })),
        ..Default::default()
    };

    initialize(&page, &config, &content, 2025);

    let children = page.mount("[data-cms=\"features\"]").unwrap().children();
    assert_eq!(children.len(), 4);
    for (fragment, (name, description)) in children.iter().zip(&features) {
        assert_eq!(fragment.root_tag(), Some("article"));
        assert!(fragment.html().contains(&format!("<h3>{name}</h3>")));
        assert!(fragment.html().contains(*description));
    }
}

#[test]
fn absent_mounts_are_skipped_without_side_effects() {
    let config = PageConfig::default();
    let page = MemoryPage::new().with_slot(&config, Slot::Testimonials);

    let startup = initialize(&page, &config, &Content::builtin(), 2025);

    assert_eq!(page.total_children(), 3);
    assert_eq!(startup.summary.outcome(Slot::Features), Some(SlotOutcome::Skipped));
    assert_eq!(startup.summary.skipped().count(), 4);
    assert!(!startup.year_stamped);
    assert!(startup.nav.is_none());
}

#[test]
fn mounts_are_looked_up_once_per_slot() {
    let config = PageConfig::default();
    let page = MemoryPage::new();

    initialize(&page, &config, &Content::builtin(), 2025);

    assert_eq!(page.lookups(), Slot::ALL.len());
}

#[test]
fn steps_are_numbered_in_order() {
    let config = PageConfig::default();
    let page = MemoryPage::new().with_slot(&config, Slot::Steps);

    initialize(&page, &config, &Content::builtin(), 2025);

    let children = page.mount(&config.mount_selector(Slot::Steps)).unwrap().children();
    let titles = ["Capture", "Automate", "Ship"];
    for (index, fragment) in children.iter().enumerate() {
        let ordinal = format!("class=\"step__badge\">{}</div>", index + 1);
        assert!(fragment.html().contains(&ordinal), "{}", fragment.html());
        assert!(fragment.html().contains(titles[index]));
    }
}

#[test]
fn year_element_gets_four_digit_year() {
    let config = PageConfig::default();
    let page = MemoryPage::new().with_year_element("year");

    let startup = initialize(&page, &config, &Content::default(), 2031);

    assert!(startup.year_stamped);
    assert_eq!(page.year_text().as_deref(), Some("2031"));
}

#[test]
fn custom_year_id_misses_default_year_element() {
    let config = PageConfig::from_json(r#"{"year_element_id": "copyright"}"#).unwrap();
    let page = MemoryPage::new().with_year_element("year");

    let startup = initialize(&page, &config, &Content::default(), 2031);

    assert!(!startup.year_stamped);
    assert_eq!(page.year_text().as_deref(), Some(""));
}

#[test]
fn custom_year_id_is_stamped() {
    let config = PageConfig::from_json(r#"{"year_element_id": "copyright"}"#).unwrap();
    let page = MemoryPage::new().with_year_element("copyright");

    let startup = initialize(&page, &config, &Content::default(), 2031);

    assert!(startup.year_stamped);
    assert_eq!(page.year_text().as_deref(), Some("2031"));
}

#[test]
fn custom_drawer_selector_misses_default_drawer() {
    let config =
        PageConfig::from_json(r##"{"nav": {"drawer_selector": "#site-drawer"}}"##).unwrap();
    let page = MemoryPage::new().with_configured_nav(&PageConfig::default().nav, 2);

    let startup = initialize(&page, &config, &Content::default(), 2025);

    assert!(startup.nav.is_none());
    assert_eq!(page.click_menu(), None);
    assert!(!page.nav().unwrap().drawer_has_class("is-open"));
}

#[test]
fn custom_nav_selectors_bind() {
    let config = PageConfig::from_json(
        r##"{"nav": {"menu_selector": "#menu", "drawer_selector": "#site-drawer"}}"##,
    )
    .unwrap();
    let page = MemoryPage::new().with_nav("#menu", "#site-drawer", 1);

    let startup = initialize(&page, &config, &Content::default(), 2025);

    assert!(startup.nav.is_some());
    assert_eq!(page.click_menu(), Some(NavState::Open));
    assert!(page.nav().unwrap().drawer_has_class("is-open"));
}

#[test]
fn menu_toggles_and_links_close() {
    let config = PageConfig::default();
    let page = full_page(&config);
    let startup = initialize(&page, &config, &Content::default(), 2025);
    let toggle = startup.nav.expect("nav should bind");
    let nav = page.nav().unwrap();

    assert_eq!(toggle.state(), NavState::Closed);
    assert_eq!(nav.aria_expanded(), None);

    assert_eq!(page.click_menu(), Some(NavState::Open));
    assert!(nav.drawer_has_class("is-open"));
    assert_eq!(nav.aria_expanded().as_deref(), Some("true"));

    assert_eq!(page.click_menu(), Some(NavState::Closed));
    assert!(!nav.drawer_has_class("is-open"));
    assert_eq!(nav.aria_expanded().as_deref(), Some("false"));

    for _ in 0..5 {
        page.click_menu();
    }
    assert_eq!(toggle.state(), NavState::Open);

    assert_eq!(page.click_link(2), Some(NavState::Closed));
    assert!(!nav.drawer_has_class("is-open"));
    assert_eq!(nav.aria_expanded().as_deref(), Some("false"));
}

#[test]
fn custom_open_class_is_used() {
    let config = PageConfig::from_json(r#"{"nav": {"open_class": "drawer--open"}}"#).unwrap();
    let page = MemoryPage::new().with_configured_nav(&config.nav, 1);

    initialize(&page, &config, &Content::default(), 2025);
    page.click_menu();

    let nav = page.nav().unwrap();
    assert!(nav.drawer_has_class("drawer--open"));
    assert!(!nav.drawer_has_class("is-open"));
}

#[test]
fn cms_document_with_bad_records_still_renders_siblings() {
    init_tracing();
    let config = PageConfig::default();
    let page = full_page(&config);
    let content = Content::from_json(
        r#"{
            "features": [
                {"name": "Good", "description": "ok", "icon": "*", "category": "A"},
                {"name": "Broken"}
            ],
            "testimonials": {"not": "a list"},
            "faq": [{"question": "Q?", "answer": "A."}]
        }"#,
    )
    .unwrap();

    let startup = initialize(&page, &config, &content, 2025);

    assert_eq!(
        startup.summary.outcome(Slot::Features),
        Some(SlotOutcome::Rendered {
            appended: 2,
            placeholders: 1,
            failed: 0,
        })
    );
    assert_eq!(startup.summary.appended(Slot::Testimonials), 0);
    assert_eq!(startup.summary.appended(Slot::Faq), 1);

    let features = page.mount(&config.mount_selector(Slot::Features)).unwrap();
    let html = features.inner_html();
    assert!(html.contains("<h3>Good</h3>"));
    assert!(html.contains("data-cms-error"));
    assert!(!html.contains("Broken</h3>"));
}

#[test]
fn memory_page_reports_missing_year_element() {
    let page = MemoryPage::new();
    assert!(!page.set_text_by_id("year", "2025"));
}
