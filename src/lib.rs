pub mod brief;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod render;

pub use brief::{classify_line, parse_notes, Brief, Mode, Section, SectionLimits, PLACEHOLDER};
pub use config::Settings;
pub use error::BriefError;
pub use input::read_input_text;
pub use output::save_markdown;
pub use pipeline::{process_batch, process_single_file, RunConfig};
pub use render::{format_markdown, RenderOptions};
