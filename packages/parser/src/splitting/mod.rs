//! Section splitting for AI analysis responses.
//!
//! The upstream model does not emit a guaranteed delimiter format, so
//! splitting runs a cascade of strategies over three known real-world
//! variants: `---` rules, blank lines before headings, and bare headings.

mod engine;
mod strategy;

pub use engine::SectionSplitter;
pub use strategy::{BlankLineHeadingSplit, HeadingSplit, HorizontalRuleSplit, SplitStrategy};
