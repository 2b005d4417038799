//! External reference sources rendered as cards on the page.
//!
//! The source lists are fixed at compile time. They are never sorted,
//! filtered, or mutated; cards render in declaration order.

use serde::Serialize;

/// One third-party reference: rendered as a card with an outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExternalSource {
    /// Display title of the source.
    pub title: &'static str,
    /// One-line description shown under the title.
    pub description: &'static str,
    /// Absolute HTTPS URL, opened in a new browsing context.
    pub url: &'static str,
    /// Short glyph shown in the card corner.
    pub icon: &'static str,
}

/// Sources for the classic page.
pub const CLASSIC_SOURCES: [ExternalSource; 6] = [
    ExternalSource {
        title: "联合国气候行动",
        description: "联合国官方气候变化信息和报告",
        url: "https://www.un.org/zh/climatechange/",
        icon: "🌍",
    },
    ExternalSource {
        title: "世界气象组织 (WMO)",
        description: "全球气候数据和气象报告",
        url: "https://wmo.int/zh-hans",
        icon: "📊",
    },
    ExternalSource {
        title: "IPCC 气候变化专门委员会",
        description: "权威的气候变化科学评估",
        url: "https://www.ipcc.ch/languages-2/chinese/",
        icon: "📈",
    },
    ExternalSource {
        title: "中国生态环境部",
        description: "中国应对气候变化的政策与行动",
        url: "https://www.mee.gov.cn/",
        icon: "🇨🇳",
    },
    ExternalSource {
        title: "中国政府网",
        description: "中国应对气候变化政策文件",
        url: "https://www.gov.cn/",
        icon: "📋",
    },
    ExternalSource {
        title: "百度百科",
        description: "全球变暖的详细百科知识",
        url: "https://baike.baidu.com/",
        icon: "📚",
    },
];

/// Sources for the perspective page. Identical to the classic list except
/// the first entry points at the UN causes-and-effects page.
pub const PERSPECTIVE_SOURCES: [ExternalSource; 6] = [
    ExternalSource {
        title: "联合国气候行动",
        description: "气候变化的成因与影响",
        url: "https://www.un.org/zh/climatechange/science/causes-effects-climate-change",
        icon: "🌍",
    },
    CLASSIC_SOURCES[1],
    CLASSIC_SOURCES[2],
    CLASSIC_SOURCES[3],
    CLASSIC_SOURCES[4],
    CLASSIC_SOURCES[5],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_sources_per_variant() {
        assert_eq!(CLASSIC_SOURCES.len(), 6);
        assert_eq!(PERSPECTIVE_SOURCES.len(), 6);
    }

    #[test]
    fn test_all_urls_are_absolute_https() {
        for source in CLASSIC_SOURCES.iter().chain(PERSPECTIVE_SOURCES.iter()) {
            assert!(
                source.url.starts_with("https://"),
                "not https: {}",
                source.url
            );
        }
    }

    #[test]
    fn test_lists_differ_only_in_first_entry() {
        assert_ne!(CLASSIC_SOURCES[0].url, PERSPECTIVE_SOURCES[0].url);
        assert_eq!(&CLASSIC_SOURCES[1..], &PERSPECTIVE_SOURCES[1..]);
    }
}
