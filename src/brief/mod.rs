//! Note-to-brief classification pipeline
//!
//! raw text -> normalize -> classify (per line) -> condense (per section) -> `Brief`

pub mod classify;
pub mod condense;
pub mod keywords;
mod model;
pub mod normalize;
mod parser;

pub use classify::classify_line;
pub use keywords::SectionLimits;
pub use model::{Brief, Mode, Section, PLACEHOLDER};
pub use parser::parse_notes;
