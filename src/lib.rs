//! warmsite - static generator for a global warming information page.
//!
//! Renders two near-identical variants of one informational page (the
//! classic 全球变暖信息网 and the newer 全球变暖新视角), writes them to an
//! output directory together with a shared stylesheet and a smooth-scroll
//! script, and can structurally validate its own output.

pub mod check;
pub mod cli;
pub mod models;
pub mod pages;
pub mod site;
pub mod utils;
