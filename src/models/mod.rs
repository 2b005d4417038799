//! Data models for the rendered site.

mod page;
mod source;

pub use page::{PageVariant, SECTION_ANCHORS};
pub use source::{ExternalSource, CLASSIC_SOURCES, PERSPECTIVE_SOURCES};
