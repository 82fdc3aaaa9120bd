use config::{Config, ConfigError};
use serde::Deserialize;

/// Options for writing `ComicInfo.xml`.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WriteSettings {
    /// Prefix the document with `<?xml version="1.0" encoding="utf-8"?>`.
    pub xml_declaration: bool,
    /// Spaces per nesting level, `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Log validation issues before writing.
    pub validate_before_write: bool,
}

impl Default for WriteSettings {
    fn default() -> Self {
        WriteSettings {
            xml_declaration: true,
            indent: Some(2),
            validate_before_write: false,
        }
    }
}

impl WriteSettings {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name(config_file))
            .build()?;
        builder.try_deserialize()
    }

    /// Single line, no declaration.
    pub fn compact() -> Self {
        WriteSettings {
            xml_declaration: false,
            indent: None,
            validate_before_write: false,
        }
    }
}
