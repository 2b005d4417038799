//! Pure HTML rendering for the two page variants.
//!
//! Rendering has no inputs beyond the variant selector and cannot fail:
//! every piece of content is a literal baked into this crate, so the same
//! variant always renders to the same bytes.

mod cards;
mod classic;
mod layout;
mod perspective;
mod sections;

pub mod assets;

use crate::models::PageVariant;

pub use cards::source_grid;

/// Render one complete HTML document for the given variant.
pub fn render(variant: PageVariant) -> String {
    match variant {
        PageVariant::Classic => classic::render(),
        PageVariant::Perspective => perspective::render(),
    }
}
