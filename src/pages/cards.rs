//! Source card grid for the 数据来源 section.

use crate::models::ExternalSource;
use crate::utils::html_escape;

/// Render one card per source, in declaration order.
///
/// Every outbound link opens in a new browsing context and withholds
/// referrer and opener access from the target page.
pub fn source_grid(sources: &[ExternalSource]) -> String {
    let mut cards = String::new();

    for source in sources {
        cards.push_str(&format!(
            r#"
            <div class="source-card">
                <div class="source-card-head">
                    <div>
                        <h4>{title}</h4>
                        <p class="source-desc">{description}</p>
                    </div>
                    <span class="source-icon">{icon}</span>
                </div>
                <a class="visit-link" href="{url}" target="_blank" rel="noopener noreferrer">访问网站 ↗</a>
            </div>
            "#,
            title = html_escape(source.title),
            description = html_escape(source.description),
            icon = html_escape(source.icon),
            url = html_escape(source.url),
        ));
    }

    format!(
        r#"<div class="source-grid">{}
        </div>"#,
        cards
    )
}
