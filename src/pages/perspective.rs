//! The perspective rendition: 全球变暖新视角.
//!
//! Hero controls carry `data-scroll` targets wired by `scroll.js` to a
//! smooth scroll-into-view, the headline figures are newer, and a closing
//! call-to-action section precedes the footer.

use crate::models::PageVariant;
use crate::pages::layout::base_document;
use crate::pages::sections::{self, KeyFigures};

const FIGURES: KeyFigures = KeyFigures {
    temp_label: "2024年全球年均温度",
    temp_value: "高于工业化前1.55°C",
    sea_level_value: "约3.7毫米/年",
};

pub fn render() -> String {
    let variant = PageVariant::Perspective;

    let hero = r#"
    <section class="hero">
        <h2>换个视角看变暖<br><span class="gradient-text">数据背后的地球</span></h2>
        <p>全球变暖是当今最紧迫的环境挑战之一。从最新数据出发，了解其定义、成因、影响，以及我们可以采取的行动。</p>
        <div class="hero-actions">
            <button class="btn primary" data-scroll="definition">开始了解</button>
            <button class="btn outline" data-scroll="sources">查看数据源</button>
        </div>
    </section>"#;

    let closing = r#"
    <section id="action" class="closing">
        <div class="container">
            <h3>从了解到行动</h3>
            <p>认识问题只是第一步。节约能源、绿色出行、减少浪费，每个人的选择都会累积成改变。</p>
            <p class="fine-print">本页数据更新于2024年，以各权威机构最新发布为准。</p>
        </div>
    </section>"#;

    let mut content = String::from(hero);
    content.push_str(&sections::definition(&FIGURES));
    content.push_str(&sections::causes());
    content.push_str(&sections::impacts());
    content.push_str(&sections::china());
    content.push_str(&sections::sources(variant.sources()));
    content.push_str(closing);

    base_document(variant, &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_buttons_use_scroll_targets() {
        let html = render();
        assert!(html.contains(r#"data-scroll="definition""#));
        assert!(html.contains(r#"data-scroll="sources""#));
    }

    #[test]
    fn test_closing_section_present() {
        let html = render();
        assert!(html.contains(r#"id="action""#));
        assert!(html.contains("从了解到行动"));
    }

    #[test]
    fn test_updated_figures_and_first_url() {
        let html = render();
        assert!(html.contains("1.55°C"));
        assert!(html.contains("causes-effects-climate-change"));
    }
}
