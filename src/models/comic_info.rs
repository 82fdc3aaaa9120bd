use super::{text_list, AgeRatingType, MangaType, Pages, Rating, YesNo};
use serde::{Deserialize, Serialize};
use url::Url;

/// Metadata of one comic or manga issue, as stored in `ComicInfo.xml`.
///
/// Fields follow the element order of the ComicInfo 2.0 schema. A `None`
/// field is left out of the document, and so is an empty page list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "ComicInfo", rename_all = "PascalCase", default)]
pub struct ComicInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Issue number. Free text, "1.5" and "Annual" are both fine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Total number of books in the series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Either a plain volume number or a year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub writer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penciller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letterer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Comma separated, URI encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
    /// BCP 47 language tag.
    #[serde(rename = "LanguageISO", skip_serializing_if = "Option::is_none")]
    pub language_iso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub black_and_white: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manga: Option<MangaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story_arc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<AgeRatingType>,
    #[serde(skip_serializing_if = "Pages::is_empty")]
    pub pages: Pages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community_rating: Option<Rating>,
    /// Holds a single character or team, unlike `characters` and `teams`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_character_or_team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

/// Contributor fields, each a comma separated list of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Writer,
    Penciller,
    Inker,
    Colorist,
    Letterer,
    CoverArtist,
    Editor,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Writer,
        Role::Penciller,
        Role::Inker,
        Role::Colorist,
        Role::Letterer,
        Role::CoverArtist,
        Role::Editor,
    ];

    /// Element name in `ComicInfo.xml`.
    pub fn element(self) -> &'static str {
        match self {
            Role::Writer => "Writer",
            Role::Penciller => "Penciller",
            Role::Inker => "Inker",
            Role::Colorist => "Colorist",
            Role::Letterer => "Letterer",
            Role::CoverArtist => "CoverArtist",
            Role::Editor => "Editor",
        }
    }
}

impl ComicInfo {
    pub fn new() -> Self {
        Self::default()
    }

    fn role_field(&self, role: Role) -> &Option<String> {
        match role {
            Role::Writer => &self.writer,
            Role::Penciller => &self.penciller,
            Role::Inker => &self.inker,
            Role::Colorist => &self.colorist,
            Role::Letterer => &self.letterer,
            Role::CoverArtist => &self.cover_artist,
            Role::Editor => &self.editor,
        }
    }

    fn role_field_mut(&mut self, role: Role) -> &mut Option<String> {
        match role {
            Role::Writer => &mut self.writer,
            Role::Penciller => &mut self.penciller,
            Role::Inker => &mut self.inker,
            Role::Colorist => &mut self.colorist,
            Role::Letterer => &mut self.letterer,
            Role::CoverArtist => &mut self.cover_artist,
            Role::Editor => &mut self.editor,
        }
    }

    /// Names credited for `role`.
    pub fn creators(&self, role: Role) -> Vec<&str> {
        self.role_field(role)
            .as_deref()
            .map(text_list::split)
            .unwrap_or_default()
    }

    /// Replaces the names credited for `role`. An empty list clears the field.
    pub fn set_creators<I, S>(&mut self, role: Role, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = text_list::join(names);
        *self.role_field_mut(role) = (!joined.is_empty()).then_some(joined);
    }

    pub fn genres(&self) -> Vec<&str> {
        self.genre
            .as_deref()
            .map(text_list::split)
            .unwrap_or_default()
    }

    /// Parses every `Web` entry. Fails on the first entry that is not a URL.
    pub fn web_urls(&self) -> Result<Vec<Url>, url::ParseError> {
        self.web
            .as_deref()
            .map(text_list::split)
            .unwrap_or_default()
            .into_iter()
            .map(Url::parse)
            .collect()
    }

    /// Trims edge whitespace from every value written as element text.
    ///
    /// XML readers drop that whitespace, so this is the form a value has
    /// after a write/read cycle. Page attributes are left untouched.
    pub fn normalize(&mut self) {
        for field in [
            &mut self.title,
            &mut self.series,
            &mut self.number,
            &mut self.alternate_series,
            &mut self.alternate_number,
            &mut self.summary,
            &mut self.notes,
            &mut self.writer,
            &mut self.penciller,
            &mut self.inker,
            &mut self.colorist,
            &mut self.letterer,
            &mut self.cover_artist,
            &mut self.editor,
            &mut self.publisher,
            &mut self.imprint,
            &mut self.genre,
            &mut self.web,
            &mut self.language_iso,
            &mut self.format,
            &mut self.characters,
            &mut self.teams,
            &mut self.locations,
            &mut self.scan_information,
            &mut self.story_arc,
            &mut self.series_group,
            &mut self.main_character_or_team,
            &mut self.review,
        ] {
            trim_text(field);
        }
        trim_label(&mut self.black_and_white);
        trim_label(&mut self.manga);
        trim_label(&mut self.age_rating);
    }

    pub fn normalized(&self) -> Self {
        let mut info = self.clone();
        info.normalize();
        info
    }

    pub fn is_right_to_left(&self) -> bool {
        self.manga.as_ref().is_some_and(MangaType::is_right_to_left)
    }
}

fn trim_text(field: &mut Option<String>) {
    if let Some(value) = field {
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_owned();
        }
    }
}

// A trimmed literal may turn out to be a named variant.
fn trim_label<T>(field: &mut Option<T>)
where
    T: From<String>,
    String: From<T>,
{
    if let Some(label) = field.take() {
        let literal = String::from(label);
        *field = Some(T::from(literal.trim().to_owned()));
    }
}
