//! Data model for `ComicInfo.xml`, the metadata file comic and manga readers
//! look for inside CBZ/CBR archives.

pub mod configuration;
pub mod error;
pub mod models;
pub mod validation;
mod xml;

pub use configuration::WriteSettings;
pub use error::{Error, Result};
pub use models::{
    AgeRatingType, ComicInfo, ComicPageInfo, ComicPageType, MangaType, Pages, Rating, Role, YesNo,
};
pub use validation::{validate, Issue};
