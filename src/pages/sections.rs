//! Thematic content sections shared by both variants.
//!
//! Sections that drifted between the two renditions of the page take the
//! drifting text as parameters; everything else is literal.

use crate::models::ExternalSource;
use crate::pages::cards::source_grid;
use crate::utils::html_escape;

/// Headline climate figures shown in the definition section.
pub struct KeyFigures {
    /// Label for the annual temperature figure, e.g. "2023年全球年均温度".
    pub temp_label: &'static str,
    /// The temperature anomaly itself.
    pub temp_value: &'static str,
    /// Sea level rise rate.
    pub sea_level_value: &'static str,
}

/// 定义 section: what global warming is, plus headline figures.
pub fn definition(figures: &KeyFigures) -> String {
    format!(
        r#"
    <section id="definition">
        <div class="container">
            <h3>🌐 全球变暖的定义</h3>
            <div class="two-col">
                <div class="card">
                    <h4 class="card-title">什么是全球变暖？</h4>
                    <p>全球变暖是指因温室效应加剧，导致地球大气与海洋温度长期上升的气候变化现象。这是由于人类活动释放的温室气体（如二氧化碳、甲烷等）不断积累在大气中，形成一层"温室"，阻止地球热量散失。</p>
                    <p class="fine-print">数据来源：联合国气候行动、IPCC第六次评估报告</p>
                </div>
                <div class="card">
                    <h4 class="card-title">关键数据</h4>
                    <div class="stat-box">
                        <p class="stat-label">{temp_label}</p>
                        <p class="stat-value">{temp_value}</p>
                    </div>
                    <div class="stat-box">
                        <p class="stat-label">全球海平面上升速度</p>
                        <p class="stat-value">{sea_level_value}</p>
                    </div>
                </div>
            </div>
        </div>
    </section>"#,
        temp_label = html_escape(figures.temp_label),
        temp_value = html_escape(figures.temp_value),
        sea_level_value = html_escape(figures.sea_level_value),
    )
}

/// 成因 section: three cause cards with share-of-emissions figures.
pub fn causes() -> String {
    let entries = [
        ("化石燃料燃烧", "煤炭、石油和天然气的燃烧占全球温室气体排放的75%以上", "75%+"),
        ("森林砍伐", "减少了地球吸收二氧化碳的能力，同时释放储存的碳", "10-15%"),
        ("农业和工业活动", "农业产生甲烷，工业排放各种温室气体", "10-15%"),
    ];

    let mut items = String::new();
    for (title, text, share) in entries {
        items.push_str(&format!(
            r#"
                <div class="card cause-card">
                    <h4 class="card-title">{}</h4>
                    <p>{}</p>
                    <div class="share">{}</div>
                </div>"#,
            html_escape(title),
            html_escape(text),
            html_escape(share),
        ));
    }

    format!(
        r#"
    <section id="causes" class="tinted">
        <div class="container">
            <h3>⚡ 全球变暖的主要成因</h3>
            <div class="three-col">{}
            </div>
        </div>
    </section>"#,
        items
    )
}

/// 影响 section: four impact cards, each with a four-item list.
pub fn impacts() -> String {
    let entries: [(&str, [&str; 4]); 4] = [
        (
            "极端天气事件增加",
            ["更频繁的热浪", "更强烈的风暴", "极端降雨和干旱", "野火频率增加"],
        ),
        (
            "生态系统破坏",
            ["物种灭绝加速", "珊瑚礁漂白", "冰川和冰盖融化", "生物多样性丧失"],
        ),
        (
            "海平面上升",
            ["沿海城市被淹没风险", "岛屿国家面临威胁", "盐碱化农田", "基础设施受损"],
        ),
        (
            "人类社会影响",
            ["粮食安全威胁", "水资源短缺", "疾病传播加剧", "经济损失巨大"],
        ),
    ];

    let mut items = String::new();
    for (title, points) in entries {
        let mut list = String::new();
        for point in points {
            list.push_str(&format!("<li>{}</li>\n                        ", html_escape(point)));
        }
        items.push_str(&format!(
            r#"
                <div class="card">
                    <h4 class="card-title">{}</h4>
                    <ul class="dot-list">
                        {}</ul>
                </div>"#,
            html_escape(title),
            list,
        ));
    }

    format!(
        r#"
    <section id="impacts">
        <div class="container">
            <h3>📈 全球变暖的主要影响</h3>
            <div class="two-col">{}
            </div>
        </div>
    </section>"#,
        items
    )
}

/// 中国力量 section: dual-carbon targets, policy measures, achievements.
pub fn china() -> String {
    let measures = [
        "优化能源结构，大力发展新能源",
        "推进工业绿色低碳转型",
        "建设绿色建筑和绿色交通",
        "保护森林和生态系统",
        "推动循环经济发展",
        "加强国际合作",
    ];

    let mut measure_items = String::new();
    for measure in measures {
        measure_items.push_str(&format!(
            "<li>{}</li>\n                        ",
            html_escape(measure)
        ));
    }

    format!(
        r#"
    <section id="china" class="tinted-warm">
        <div class="container">
            <h3>🌱 中国力量：应对气候变化</h3>
            <div class="two-col">
                <div class="card accent-green">
                    <h4 class="card-title">双碳目标</h4>
                    <p class="card-subtitle">中国的气候承诺</p>
                    <div class="stat-box green">
                        <p class="stat-label">碳达峰</p>
                        <p class="stat-value">2030年前</p>
                    </div>
                    <div class="stat-box green">
                        <p class="stat-label">碳中和</p>
                        <p class="stat-value">2060年前</p>
                    </div>
                    <p class="fine-print">这是中国向国际社会作出的庄严承诺，体现了大国担当。</p>
                </div>
                <div class="card">
                    <h4 class="card-title">主要政策措施</h4>
                    <ul class="dot-list">
                        {measures}</ul>
                </div>
            </div>
            <div class="achievement-band">
                <h4>中国的成就</h4>
                <div class="three-col">
                    <div class="achievement">
                        <p class="stat-label">可再生能源装机容量</p>
                        <p class="stat-value">全球第一</p>
                    </div>
                    <div class="achievement">
                        <p class="stat-label">新能源汽车产销量</p>
                        <p class="stat-value">全球第一</p>
                    </div>
                    <div class="achievement">
                        <p class="stat-label">森林覆盖率提升</p>
                        <p class="stat-value">显著增长</p>
                    </div>
                </div>
            </div>
        </div>
    </section>"#,
        measures = measure_items
    )
}

/// 数据来源 section: intro text plus the card grid.
pub fn sources(source_list: &[ExternalSource]) -> String {
    format!(
        r#"
    <section id="sources">
        <div class="container">
            <h3>🔗 权威数据来源</h3>
            <p class="section-intro">点击下方按钮访问权威机构的官方网站，获取最新的全球变暖数据和研究报告。</p>
            {}
        </div>
    </section>"#,
        source_grid(source_list)
    )
}
