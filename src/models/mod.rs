mod open_enum;

pub mod classification;
pub mod comic_info;
pub mod page;
pub mod rating;
pub mod text_list;

pub use classification::{AgeRatingType, MangaType, YesNo};
pub use comic_info::{ComicInfo, Role};
pub use page::{ComicPageInfo, ComicPageType, Pages};
pub use rating::Rating;
