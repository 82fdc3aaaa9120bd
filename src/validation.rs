//! Range and format checks the data model itself does not enforce.
//!
//! Nothing here rejects a value: [`validate`] reports what it finds and
//! leaves the caller to decide. Calendar fields (`Year`, `Month`, `Day`) are
//! not checked, they are independent integers in the format.

use crate::models::{text_list, ComicInfo, Rating};
use log::warn;
use std::collections::HashSet;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Issue {
    #[error("community rating {0} is outside {min}..={max}", min = Rating::MIN, max = Rating::MAX)]
    /// Carries the raw value so the message never rounds it back into range.
    RatingOutOfRange(f32),

    #[error("web entry '{entry}' is not a valid URL: {reason}")]
    InvalidWebUrl {
        entry: String,
        reason: url::ParseError,
    },

    #[error("page image index {0} is listed more than once")]
    DuplicatePageImage(i32),
}

/// Checks `info` and logs every issue at warn level.
pub fn validate(info: &ComicInfo) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(rating) = info.community_rating {
        if !rating.is_in_range() {
            issues.push(Issue::RatingOutOfRange(rating.value()));
        }
    }

    if let Some(web) = info.web.as_deref() {
        for entry in text_list::split(web) {
            if let Err(reason) = Url::parse(entry) {
                issues.push(Issue::InvalidWebUrl {
                    entry: entry.to_owned(),
                    reason,
                });
            }
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for page in &info.pages {
        if !seen.insert(page.image) && reported.insert(page.image) {
            issues.push(Issue::DuplicatePageImage(page.image));
        }
    }

    for issue in &issues {
        warn!("ComicInfo validation: {}", issue);
    }

    issues
}

impl ComicInfo {
    pub fn validate(&self) -> Vec<Issue> {
        validate(self)
    }
}
