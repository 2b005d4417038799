//! Page variants and their navigation contract.

use std::str::FromStr;

use serde::Serialize;

use super::{ExternalSource, CLASSIC_SOURCES, PERSPECTIVE_SOURCES};

/// Anchor ids that must resolve to a section in every rendered variant.
pub const SECTION_ANCHORS: [&str; 5] = ["definition", "causes", "impacts", "china", "sources"];

/// Which rendition of the page to produce.
///
/// The two variants share layout and most content. The perspective page
/// carries updated statistics, smooth-scroll hero controls, and an extra
/// closing section; the classic page navigates with plain anchor links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageVariant {
    Classic,
    Perspective,
}

impl PageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Perspective => "perspective",
        }
    }

    /// Site title shown in the nav bar and the document `<title>`.
    pub fn site_title(&self) -> &'static str {
        match self {
            Self::Classic => "全球变暖信息网",
            Self::Perspective => "全球变暖新视角",
        }
    }

    /// File name of the rendered page inside the output directory.
    pub fn output_file(&self) -> &'static str {
        match self {
            Self::Classic => "index.html",
            Self::Perspective => "perspective.html",
        }
    }

    /// The fixed external source list for this variant.
    pub fn sources(&self) -> &'static [ExternalSource; 6] {
        match self {
            Self::Classic => &CLASSIC_SOURCES,
            Self::Perspective => &PERSPECTIVE_SOURCES,
        }
    }

    pub fn all() -> [PageVariant; 2] {
        [Self::Classic, Self::Perspective]
    }
}

impl FromStr for PageVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Self::Classic),
            "perspective" => Ok(Self::Perspective),
            _ => Err(format!(
                "unknown variant {:?} (expected classic or perspective)",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_round_trip() {
        for variant in PageVariant::all() {
            assert_eq!(variant.as_str().parse(), Ok(variant));
        }
        assert!("nope".parse::<PageVariant>().is_err());
    }

    #[test]
    fn test_output_files_distinct() {
        assert_ne!(
            PageVariant::Classic.output_file(),
            PageVariant::Perspective.output_file()
        );
    }
}
