//! End-to-end structural assertions over both rendered page variants.

use scraper::{Html, Selector};

use warmsite::models::{PageVariant, CLASSIC_SOURCES, SECTION_ANCHORS};
use warmsite::pages;

fn parse(variant: PageVariant) -> Html {
    Html::parse_document(&pages::render(variant))
}

#[test]
fn six_source_cards_in_declaration_order() {
    for variant in PageVariant::all() {
        let doc = parse(variant);
        let card_sel = Selector::parse("div.source-card").unwrap();
        let link_sel = Selector::parse("a.visit-link").unwrap();

        let cards: Vec<_> = doc.select(&card_sel).collect();
        assert_eq!(cards.len(), 6, "variant {}", variant.as_str());

        for (card, source) in cards.iter().zip(variant.sources().iter()) {
            let text: String = card.text().collect();
            assert!(text.contains(source.title));
            assert!(text.contains(source.description));
            assert!(text.contains(source.icon));

            let link = card.select(&link_sel).next().unwrap();
            assert_eq!(link.value().attr("href"), Some(source.url));
        }
    }
}

#[test]
fn outbound_links_open_in_new_context_without_opener() {
    for variant in PageVariant::all() {
        let doc = parse(variant);
        let link_sel = Selector::parse("a.visit-link").unwrap();

        for link in doc.select(&link_sel) {
            assert_eq!(link.value().attr("target"), Some("_blank"));
            assert_eq!(link.value().attr("rel"), Some("noopener noreferrer"));
        }
    }
}

#[test]
fn navigation_anchors_resolve_to_sections() {
    for variant in PageVariant::all() {
        let doc = parse(variant);
        for anchor in SECTION_ANCHORS {
            let sel = Selector::parse(&format!("section#{}", anchor)).unwrap();
            assert!(
                doc.select(&sel).next().is_some(),
                "variant {} missing #{}",
                variant.as_str(),
                anchor
            );
        }
    }
}

#[test]
fn perspective_hero_controls_target_definition_and_sources() {
    let doc = parse(PageVariant::Perspective);
    for target in ["definition", "sources"] {
        let sel = Selector::parse(&format!("button[data-scroll=\"{}\"]", target)).unwrap();
        assert!(doc.select(&sel).next().is_some(), "no control for {}", target);
    }

    let script = Selector::parse("script[src=\"static/scroll.js\"]").unwrap();
    assert!(doc.select(&script).next().is_some());

    // The classic page navigates with plain anchors instead.
    let classic = pages::render(PageVariant::Classic);
    assert!(!classic.contains("data-scroll"));
    assert!(classic.contains("href=\"#definition\""));
}

#[test]
fn rendering_is_pure_and_idempotent() {
    for variant in PageVariant::all() {
        assert_eq!(pages::render(variant), pages::render(variant));
    }
}

#[test]
fn example_scenario_headings_and_first_link() {
    let classic = parse(PageVariant::Classic);
    let logo_sel = Selector::parse("span.logo").unwrap();
    let logo: String = classic.select(&logo_sel).next().unwrap().text().collect();
    assert!(logo.contains("全球变暖信息网"));

    let link_sel = Selector::parse("a.visit-link").unwrap();
    let first = classic.select(&link_sel).next().unwrap();
    assert_eq!(
        first.value().attr("href"),
        Some("https://www.un.org/zh/climatechange/")
    );
    assert_eq!(CLASSIC_SOURCES[0].url, "https://www.un.org/zh/climatechange/");

    let perspective = parse(PageVariant::Perspective);
    let logo: String = perspective.select(&logo_sel).next().unwrap().text().collect();
    assert!(logo.contains("全球变暖新视角"));

    let first = perspective.select(&link_sel).next().unwrap();
    assert_eq!(
        first.value().attr("href"),
        Some("https://www.un.org/zh/climatechange/science/causes-effects-climate-change")
    );
}

#[test]
fn build_then_check_round_trip() {
    use tempfile::tempdir;
    use warmsite::{check, site};

    let dir = tempdir().unwrap();
    let report = site::build_site(dir.path(), &PageVariant::all()).unwrap();
    assert_eq!(report.written.len(), 4);

    for variant in PageVariant::all() {
        let written = std::fs::read_to_string(dir.path().join(variant.output_file())).unwrap();
        assert_eq!(written, pages::render(variant));
        assert!(check::check_page(variant).is_empty());
    }
}
