use super::open_enum::open_enum;
use serde::{Deserialize, Serialize};

open_enum! {
    /// Narrative role of a page.
    pub enum ComicPageType {
        FrontCover => "FrontCover",
        /// A second cover found inside the book.
        InnerCover => "InnerCover",
        /// Summary of the previous issue.
        Roundup => "Roundup",
        Story => "Story",
        Advertisement => "Advertisement",
        Editorial => "Editorial",
        /// Fan letters.
        Letters => "Letters",
        /// Trailer for the next book or another book.
        Preview => "Preview",
        BackCover => "BackCover",
        Other => "Other",
        /// Viewers should skip this page.
        Deleted => "Deleted",
    }
}

impl Default for ComicPageType {
    fn default() -> Self {
        ComicPageType::Story
    }
}

impl ComicPageType {
    pub fn is_cover(&self) -> bool {
        matches!(
            self,
            ComicPageType::FrontCover | ComicPageType::InnerCover | ComicPageType::BackCover
        )
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, ComicPageType::Deleted)
    }
}

/// One physical page of the archive. Carried as attributes of a `Page`
/// element; every attribute except `Image` is left out while at its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComicPageInfo {
    /// 0-based page index.
    #[serde(rename = "@Image")]
    pub image: i32,
    #[serde(rename = "@Type", default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<ComicPageType>,
    #[serde(rename = "@DoublePage", default, skip_serializing_if = "is_false")]
    pub double_page: bool,
    /// Size of the image file in bytes.
    #[serde(rename = "@ImageSize", default, skip_serializing_if = "is_default")]
    pub image_size: i64,
    #[serde(rename = "@Key", default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Reserved for reader applications.
    #[serde(rename = "@Bookmark", default, skip_serializing_if = "String::is_empty")]
    pub bookmark: String,
    #[serde(rename = "@ImageWidth", default, skip_serializing_if = "is_default")]
    pub image_width: i32,
    #[serde(rename = "@ImageHeight", default, skip_serializing_if = "is_default")]
    pub image_height: i32,
}

impl ComicPageInfo {
    pub fn new(image: i32) -> Self {
        ComicPageInfo {
            image,
            ..Default::default()
        }
    }

    pub fn with_type(mut self, page_type: ComicPageType) -> Self {
        self.page_type = Some(page_type);
        self
    }

    /// Effective type, an absent `Type` reads as `Story`.
    pub fn page_type(&self) -> ComicPageType {
        self.page_type.clone().unwrap_or_default()
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self.page_type, Some(ComicPageType::Deleted))
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// The `Pages` container. Order is the physical page order of the book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(rename = "Page", default)]
    page: Vec<ComicPageInfo>,
}

impl Pages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, page: ComicPageInfo) {
        self.page.push(page);
    }

    pub fn len(&self) -> usize {
        self.page.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ComicPageInfo> {
        self.page.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComicPageInfo> {
        self.page.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ComicPageInfo> {
        self.page.iter_mut()
    }

    /// Pages a viewer should show, skipping those typed `Deleted`.
    pub fn visible(&self) -> impl Iterator<Item = &ComicPageInfo> {
        self.page.iter().filter(|p| !p.is_deleted())
    }

    pub fn as_slice(&self) -> &[ComicPageInfo] {
        &self.page
    }
}

impl From<Vec<ComicPageInfo>> for Pages {
    fn from(page: Vec<ComicPageInfo>) -> Self {
        Pages { page }
    }
}

impl FromIterator<ComicPageInfo> for Pages {
    fn from_iter<I: IntoIterator<Item = ComicPageInfo>>(iter: I) -> Self {
        Pages {
            page: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Pages {
    type Item = ComicPageInfo;
    type IntoIter = std::vec::IntoIter<ComicPageInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.page.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pages {
    type Item = &'a ComicPageInfo;
    type IntoIter = std::slice::Iter<'a, ComicPageInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.page.iter()
    }
}
