//! Structural validation of rendered pages.
//!
//! Parses the rendered HTML and verifies the page's navigation and source
//! card contract: every nav anchor resolves to a section, exactly six
//! source cards appear in declaration order, and every outbound link opens
//! in a new context without opener or referrer access.

use std::fmt;

use scraper::{Html, Selector};

use crate::models::{PageVariant, SECTION_ANCHORS};
use crate::pages;

/// One structural problem found in a rendered page.
#[derive(Debug)]
pub struct Finding {
    pub variant: PageVariant,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.variant.as_str(), self.message)
    }
}

/// Render the variant and check it. Empty result means the page is sound.
pub fn check_page(variant: PageVariant) -> Vec<Finding> {
    check_html(variant, &pages::render(variant))
}

fn check_html(variant: PageVariant, html: &str) -> Vec<Finding> {
    let doc = Html::parse_document(html);
    let mut findings = Vec::new();
    let mut report = |message: String| findings.push(Finding { variant, message });

    // Selectors are literals; parse failures would be programmer error.
    let card_sel = Selector::parse("div.source-card").unwrap();
    let link_sel = Selector::parse("a.visit-link").unwrap();
    let title_sel = Selector::parse("title").unwrap();

    for anchor in SECTION_ANCHORS {
        let sel = Selector::parse(&format!("section#{}", anchor)).unwrap();
        if doc.select(&sel).next().is_none() {
            report(format!("anchor #{} has no matching section", anchor));
        }
    }

    let expected = variant.sources();

    let cards: Vec<_> = doc.select(&card_sel).collect();
    if cards.len() != expected.len() {
        report(format!(
            "expected {} source cards, found {}",
            expected.len(),
            cards.len()
        ));
    }

    for (idx, (card, source)) in cards.iter().zip(expected.iter()).enumerate() {
        let text: String = card.text().collect();
        if !text.contains(source.title) {
            report(format!("card {} missing title {:?}", idx, source.title));
        }
        if !text.contains(source.description) {
            report(format!("card {} missing description", idx));
        }
        if !text.contains(source.icon) {
            report(format!("card {} missing icon {}", idx, source.icon));
        }

        match card.select(&link_sel).next() {
            None => report(format!("card {} has no outbound link", idx)),
            Some(link) => {
                if link.value().attr("href") != Some(source.url) {
                    report(format!(
                        "card {} link is {:?}, expected {}",
                        idx,
                        link.value().attr("href"),
                        source.url
                    ));
                }
                if link.value().attr("target") != Some("_blank") {
                    report(format!("card {} link does not open a new context", idx));
                }
                let rel = link.value().attr("rel").unwrap_or("");
                if !rel.contains("noopener") || !rel.contains("noreferrer") {
                    report(format!("card {} link leaks opener/referrer (rel={:?})", idx, rel));
                }
            }
        }
    }

    let title_text: String = doc
        .select(&title_sel)
        .next()
        .map(|t| t.text().collect())
        .unwrap_or_default();
    if title_text != variant.site_title() {
        report(format!(
            "document title is {:?}, expected {:?}",
            title_text,
            variant.site_title()
        ));
    }

    if variant == PageVariant::Perspective {
        for target in ["definition", "sources"] {
            let sel = Selector::parse(&format!("[data-scroll=\"{}\"]", target)).unwrap();
            if doc.select(&sel).next().is_none() {
                report(format!("no scroll control targeting #{}", target));
            }
        }
        let script_sel = Selector::parse("script[src=\"static/scroll.js\"]").unwrap();
        if doc.select(&script_sel).next().is_none() {
            report("smooth-scroll script is not loaded".to_string());
        }
        let closing_sel = Selector::parse("section#action").unwrap();
        if doc.select(&closing_sel).next().is_none() {
            report("closing section is missing".to_string());
        }
    }

    findings
}
