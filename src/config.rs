use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use crate::error::BriefError;
use crate::render::DEFAULT_MAX_KTAS;

/// Defaults for CLI options, layered from built-ins, an optional config
/// file and `BRIEFSMITH_*` environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub max_ktas: usize,
    pub max_bullets: Option<usize>,
    pub email_ready: bool,
}

impl Settings {
    pub const DEFAULT_PATH: &'static str = "config/briefsmith";

    /// Load settings; a missing file at `path` is not an error
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("output_dir", "outputs")?
            .set_default("max_ktas", i64::try_from(DEFAULT_MAX_KTAS)?)?
            .set_default("email_ready", false)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("BRIEFSMITH").try_parsing(true))
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), BriefError> {
        if self.max_ktas == 0 {
            return Err(BriefError::validation("max_ktas must be >= 1"));
        }
        if self.max_bullets == Some(0) {
            return Err(BriefError::validation("max_bullets must be >= 1"));
        }
        Ok(())
    }
}
