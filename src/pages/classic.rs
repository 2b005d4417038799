//! The classic rendition: 全球变暖信息网.
//!
//! Navigation is plain in-page anchor links; no script runs on this page.

use crate::models::PageVariant;
use crate::pages::layout::base_document;
use crate::pages::sections::{self, KeyFigures};

const FIGURES: KeyFigures = KeyFigures {
    temp_label: "2023年全球年均温度",
    temp_value: "高于工业化前1.45°C",
    sea_level_value: "约3.4毫米/年",
};

pub fn render() -> String {
    let variant = PageVariant::Classic;

    let hero = r##"
    <section class="hero">
        <h2>了解全球变暖<br><span class="gradient-text">保护我们的地球</span></h2>
        <p>全球变暖是当今最紧迫的环境挑战之一。了解其定义、成因、影响，以及我们可以采取的行动。</p>
        <div class="hero-actions">
            <a class="btn primary" href="#definition">开始了解</a>
            <a class="btn outline" href="#sources">查看数据源</a>
        </div>
    </section>"##;

    let mut content = String::from(hero);
    content.push_str(&sections::definition(&FIGURES));
    content.push_str(&sections::causes());
    content.push_str(&sections::impacts());
    content.push_str(&sections::china());
    content.push_str(&sections::sources(variant.sources()));

    base_document(variant, &content)
}
