//! Document shell shared by both page variants.

use crate::models::PageVariant;
use crate::utils::html_escape;

/// Nav labels paired with their anchor targets, in display order.
const NAV_LINKS: [(&str, &str); 5] = [
    ("definition", "定义"),
    ("causes", "成因"),
    ("impacts", "影响"),
    ("china", "中国力量"),
    ("sources", "数据来源"),
];

/// Wrap page content in the full HTML document: head, sticky nav, footer.
///
/// The perspective variant additionally loads the smooth-scroll script.
pub fn base_document(variant: PageVariant, content: &str) -> String {
    let title = html_escape(variant.site_title());

    let mut nav_items = String::new();
    for (anchor, label) in NAV_LINKS {
        nav_items.push_str(&format!(
            r##"<a href="#{}">{}</a>
            "##,
            anchor, label
        ));
    }

    let script_tag = match variant {
        PageVariant::Classic => "",
        PageVariant::Perspective => r#"<script src="static/scroll.js" defer></script>"#,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="static/style.css">
    {script_tag}
</head>
<body>
    <nav id="top-nav">
        <div class="nav-inner">
            <span class="logo">🌏 {title}</span>
            <div class="nav-links">
            {nav_items}</div>
        </div>
    </nav>
{content}
    {footer}
</body>
</html>"#,
        title = title,
        script_tag = script_tag,
        nav_items = nav_items,
        content = content,
        footer = footer(variant),
    )
}

/// Four-column footer with quick links mirroring the nav anchors.
fn footer(variant: PageVariant) -> String {
    format!(
        r##"<footer>
        <div class="footer-grid">
            <div>
                <h4>关于我们</h4>
                <p>致力于提供全球变暖的科学知识和权威信息。</p>
            </div>
            <div>
                <h4>快速链接</h4>
                <ul>
                    <li><a href="#definition">定义</a></li>
                    <li><a href="#causes">成因</a></li>
                    <li><a href="#impacts">影响</a></li>
                </ul>
            </div>
            <div>
                <h4>资源</h4>
                <ul>
                    <li><a href="#china">中国力量</a></li>
                    <li><a href="#sources">数据来源</a></li>
                </ul>
            </div>
            <div>
                <h4>联系方式</h4>
                <p>Email: info@globalwarming.cn</p>
            </div>
        </div>
        <div class="footer-note">
            <p>&copy; 2024 {}. 保护地球，从了解开始。</p>
        </div>
    </footer>"##,
        html_escape(variant.site_title())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_contains_all_nav_anchors() {
        let doc = base_document(PageVariant::Classic, "<main></main>");
        for (anchor, _) in NAV_LINKS {
            assert!(doc.contains(&format!("href=\"#{}\"", anchor)));
        }
    }

    #[test]
    fn test_footer_quick_links_repeat_every_anchor() {
        // Each anchor must appear twice in the bare shell: nav and footer.
        let doc = base_document(PageVariant::Perspective, "");
        for (anchor, _) in NAV_LINKS {
            let link = format!("href=\"#{}\"", anchor);
            assert_eq!(doc.matches(&link).count(), 2, "missing {}", link);
        }
    }

    #[test]
    fn test_scroll_script_only_on_perspective() {
        let classic = base_document(PageVariant::Classic, "");
        let perspective = base_document(PageVariant::Perspective, "");
        assert!(!classic.contains("scroll.js"));
        assert!(perspective.contains("static/scroll.js"));
    }
}
