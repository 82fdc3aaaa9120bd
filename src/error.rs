use thiserror::Error;

/// Errors from reading or writing `ComicInfo.xml`.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is malformed or a value has the wrong type.
    #[error("failed to read ComicInfo: {0}")]
    Decode(#[from] quick_xml::DeError),

    #[error("failed to write ComicInfo: {0}")]
    Encode(#[from] quick_xml::SeError),
}

pub type Result<T> = std::result::Result<T, Error>;
