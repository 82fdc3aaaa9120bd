use crate::configuration::WriteSettings;
use crate::error::Result;
use crate::models::ComicInfo;
use crate::validation;
use log::debug;
use quick_xml::se::Serializer;
use serde::Serialize;
use std::io::BufRead;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

impl ComicInfo {
    /// Reads a `ComicInfo` document. Elements and attributes the model does
    /// not know about (such as the `xmlns:xsi` declarations) are ignored.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let info: ComicInfo = quick_xml::de::from_str(xml)?;
        debug!(
            "Read ComicInfo {:?} with {} pages",
            info.title,
            info.pages.len()
        );
        Ok(info)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let info: ComicInfo = quick_xml::de::from_reader(reader)?;
        debug!(
            "Read ComicInfo {:?} with {} pages",
            info.title,
            info.pages.len()
        );
        Ok(info)
    }

    /// Writes the document with [`WriteSettings::default`].
    pub fn to_xml(&self) -> Result<String> {
        self.to_xml_with(&WriteSettings::default())
    }

    /// Element text is written trimmed (see [`ComicInfo::normalize`]), the
    /// form a reader returns it in.
    pub fn to_xml_with(&self, settings: &WriteSettings) -> Result<String> {
        if settings.validate_before_write {
            validation::validate(self);
        }

        let mut xml = String::new();
        if settings.xml_declaration {
            xml.push_str(XML_DECLARATION);
            xml.push('\n');
        }

        let mut serializer = Serializer::new(&mut xml);
        if let Some(width) = settings.indent {
            serializer.indent(' ', width);
        }
        self.normalized().serialize(serializer)?;

        debug!(
            "Wrote ComicInfo {:?}: {} bytes, {} pages",
            self.title,
            xml.len(),
            self.pages.len()
        );
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AgeRatingType, ComicPageInfo, ComicPageType, MangaType, Pages, Rating, YesNo,
    };

    const FIXTURE: &str = include_str!("../test/ComicInfo.xml");

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn round_trip(info: &ComicInfo) -> anyhow::Result<ComicInfo> {
        let xml = info.to_xml()?;
        Ok(ComicInfo::from_xml(&xml)?)
    }

    fn fully_populated() -> ComicInfo {
        ComicInfo {
            title: Some("Chapter 1: Romance Dawn".into()),
            series: Some("One Piece".into()),
            number: Some("1".into()),
            count: Some(110),
            volume: Some(1997),
            alternate_series: Some("Shonen Jump".into()),
            alternate_number: Some("1997-34".into()),
            alternate_count: Some(52),
            summary: Some("Luffy sets out to sea & meets Zoro.".into()),
            notes: Some("Tagged <by hand>".into()),
            year: Some(1997),
            month: Some(7),
            day: Some(22),
            writer: Some("Eiichiro Oda".into()),
            penciller: Some("Eiichiro Oda".into()),
            inker: Some("Eiichiro Oda".into()),
            colorist: Some("Studio A, Studio B".into()),
            letterer: Some("Lettering Co".into()),
            cover_artist: Some("Eiichiro Oda".into()),
            editor: Some("Someone Editor".into()),
            publisher: Some("Shueisha".into()),
            imprint: Some("Jump Comics".into()),
            genre: Some("Action, Adventure".into()),
            web: Some("https://example.com/op/1".into()),
            page_count: Some(3),
            language_iso: Some("en-US".into()),
            format: Some("Digital".into()),
            black_and_white: Some(YesNo::No),
            manga: Some(MangaType::YesAndRightToLeft),
            characters: Some("Luffy, Zoro, Shanks".into()),
            teams: Some("Straw Hat Pirates".into()),
            locations: Some("Foosha Village".into()),
            scan_information: Some("Digital release".into()),
            story_arc: Some("Romance Dawn".into()),
            series_group: Some("Jump Classics".into()),
            age_rating: Some(AgeRatingType::Teen),
            pages: vec![
                ComicPageInfo {
                    image: 0,
                    page_type: Some(ComicPageType::FrontCover),
                    double_page: false,
                    image_size: 5_000_000_000,
                    key: "cover-key".into(),
                    bookmark: "Start".into(),
                    image_width: 1400,
                    image_height: 2100,
                },
                ComicPageInfo::new(1),
                ComicPageInfo {
                    double_page: true,
                    ..ComicPageInfo::new(2).with_type(ComicPageType::Story)
                },
            ]
            .into(),
            community_rating: Some(Rating::new(4.25)),
            main_character_or_team: Some("Luffy".into()),
            review: Some("A classic.".into()),
        }
    }

    #[test]
    fn empty_info_round_trips() -> anyhow::Result<()> {
        init();
        let info = ComicInfo::new();
        assert_eq!(round_trip(&info)?, info);
        Ok(())
    }

    #[test]
    fn fully_populated_info_round_trips() -> anyhow::Result<()> {
        init();
        let info = fully_populated();
        assert_eq!(round_trip(&info)?, info);

        let compact = info.to_xml_with(&WriteSettings::compact())?;
        assert_eq!(ComicInfo::from_xml(&compact)?, info);
        Ok(())
    }

    #[test]
    fn page_lists_of_any_length_round_trip() -> anyhow::Result<()> {
        init();
        for count in [0, 1, 12] {
            let info = ComicInfo {
                pages: (0..count).map(ComicPageInfo::new).collect(),
                ..Default::default()
            };
            let decoded = round_trip(&info)?;
            assert_eq!(decoded.pages.len(), count as usize);
            assert_eq!(decoded, info);
        }
        Ok(())
    }

    #[test]
    fn default_page_attributes_are_omitted() -> anyhow::Result<()> {
        let info = ComicInfo {
            pages: Pages::from(vec![ComicPageInfo::new(0)]),
            ..Default::default()
        };
        let xml = info.to_xml_with(&WriteSettings::compact())?;

        assert!(xml.contains(r#"Image="0""#));
        for attribute in [
            "Type=",
            "DoublePage=",
            "ImageSize=",
            "Key=",
            "Bookmark=",
            "ImageWidth=",
            "ImageHeight=",
        ] {
            assert!(!xml.contains(attribute), "{attribute} written in {xml}");
        }
        Ok(())
    }

    #[test]
    fn absent_fields_and_empty_pages_are_not_written() -> anyhow::Result<()> {
        let info = ComicInfo {
            title: Some("Only a title".into()),
            ..Default::default()
        };
        let xml = info.to_xml_with(&WriteSettings::compact())?;

        assert!(xml.starts_with("<ComicInfo"));
        assert!(xml.contains("<Title>Only a title</Title>"));
        assert!(!xml.contains("Pages"));
        assert!(!xml.contains("Series"));
        assert!(!xml.contains("CommunityRating"));
        Ok(())
    }

    #[test]
    fn element_names_match_the_format() -> anyhow::Result<()> {
        let xml = fully_populated().to_xml()?;

        for element in [
            "<LanguageISO>en-US</LanguageISO>",
            "<BlackAndWhite>No</BlackAndWhite>",
            "<Manga>YesAndRightToLeft</Manga>",
            "<AgeRating>Teen</AgeRating>",
            "<MainCharacterOrTeam>Luffy</MainCharacterOrTeam>",
            "<CoverArtist>Eiichiro Oda</CoverArtist>",
            "<ScanInformation>Digital release</ScanInformation>",
            "<AlternateSeries>Shonen Jump</AlternateSeries>",
            "<Pages>",
        ] {
            assert!(xml.contains(element), "missing {element} in {xml}");
        }
        assert!(xml.contains(r#"ImageSize="5000000000""#));
        assert!(xml.contains(r#"DoublePage="true""#));
        Ok(())
    }

    #[test]
    fn declaration_and_indent_follow_settings() -> anyhow::Result<()> {
        let info = ComicInfo {
            series: Some("Berserk".into()),
            ..Default::default()
        };

        let pretty = info.to_xml()?;
        assert!(pretty.starts_with(XML_DECLARATION));
        assert!(pretty.contains("\n  <Series>Berserk</Series>"));

        let compact = info.to_xml_with(&WriteSettings::compact())?;
        assert!(!compact.starts_with("<?xml"));
        assert!(!compact.contains('\n'));
        Ok(())
    }

    #[test]
    fn edge_whitespace_is_written_trimmed() -> anyhow::Result<()> {
        init();
        let info = ComicInfo {
            title: Some("  padded  ".into()),
            summary: Some("line1\n\nline2\n".into()),
            ..Default::default()
        };

        let xml = info.to_xml_with(&WriteSettings::compact())?;
        assert!(xml.contains("<Title>padded</Title>"));
        assert!(xml.contains("<Summary>line1\n\nline2</Summary>"));

        let decoded = ComicInfo::from_xml(&xml)?;
        assert_eq!(decoded.title.as_deref(), Some("padded"));
        assert_eq!(decoded.summary.as_deref(), Some("line1\n\nline2"));
        assert_eq!(decoded, info.normalized());
        assert_eq!(round_trip(&decoded)?, decoded);
        Ok(())
    }

    #[test]
    fn validate_before_write_still_writes() -> anyhow::Result<()> {
        init();
        let info = ComicInfo {
            community_rating: Some(Rating::new(7.5)),
            ..Default::default()
        };
        let settings = WriteSettings {
            validate_before_write: true,
            ..WriteSettings::compact()
        };

        let xml = info.to_xml_with(&settings)?;
        assert!(xml.contains("<CommunityRating>7.5</CommunityRating>"));
        assert_eq!(ComicInfo::from_xml(&xml)?, info);
        Ok(())
    }

    #[test]
    fn pages_keep_document_order() -> anyhow::Result<()> {
        init();
        let xml = r#"<ComicInfo>
            <Pages>
                <Page Image="0" Type="FrontCover"/>
                <Page Image="1"/>
                <Page Image="2" Type="Story" DoublePage="true"/>
            </Pages>
        </ComicInfo>"#;

        let info = ComicInfo::from_xml(xml)?;
        let pages = info.pages.as_slice();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].page_type, Some(ComicPageType::FrontCover));
        assert_eq!(pages[1].page_type, None);
        assert_eq!(pages[1].page_type(), ComicPageType::Story);
        assert!(!pages[1].double_page);
        assert!(pages[2].double_page);
        assert_eq!(
            pages.iter().map(|p| p.image).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        Ok(())
    }

    #[test]
    fn out_of_order_indices_are_not_reordered() -> anyhow::Result<()> {
        let xml = r#"<ComicInfo><Pages><Page Image="5"/><Page Image="2"/><Page Image="9"/></Pages></ComicInfo>"#;
        let info = ComicInfo::from_xml(xml)?;
        let order: Vec<i32> = info.pages.iter().map(|p| p.image).collect();
        assert_eq!(order, vec![5, 2, 9]);
        Ok(())
    }

    #[test]
    fn unknown_enum_values_survive() -> anyhow::Result<()> {
        let xml = r#"<ComicInfo>
            <BlackAndWhite>Partly</BlackAndWhite>
            <Manga>Manhwa</Manga>
            <AgeRating>PEGI 16</AgeRating>
            <Pages><Page Image="0" Type="Credits"/></Pages>
        </ComicInfo>"#;

        let info = ComicInfo::from_xml(xml)?;
        assert_eq!(info.black_and_white, Some(YesNo::Unrecognized("Partly".into())));
        assert_eq!(info.manga, Some(MangaType::Unrecognized("Manhwa".into())));
        assert_eq!(
            info.age_rating,
            Some(AgeRatingType::Unrecognized("PEGI 16".into()))
        );
        assert_eq!(
            info.pages.as_slice()[0].page_type,
            Some(ComicPageType::Unrecognized("Credits".into()))
        );

        let written = info.to_xml()?;
        assert!(written.contains("<AgeRating>PEGI 16</AgeRating>"));
        assert!(written.contains(r#"Type="Credits""#));
        assert_eq!(ComicInfo::from_xml(&written)?, info);
        Ok(())
    }

    #[test]
    fn empty_pages_container_reads_as_no_pages() -> anyhow::Result<()> {
        let info = ComicInfo::from_xml("<ComicInfo><Pages/></ComicInfo>")?;
        assert!(info.pages.is_empty());
        assert_eq!(info, ComicInfo::default());
        Ok(())
    }

    #[test]
    fn rating_bounds_decode() -> anyhow::Result<()> {
        for (text, expected) in [("0.00", 0.0), ("5.00", 5.0), ("4.75", 4.75)] {
            let xml = format!("<ComicInfo><CommunityRating>{text}</CommunityRating></ComicInfo>");
            let info = ComicInfo::from_xml(&xml)?;
            assert_eq!(info.community_rating, Some(Rating::new(expected)));
            assert!(info.validate().is_empty());
        }
        Ok(())
    }

    #[test]
    fn reads_real_world_document() -> anyhow::Result<()> {
        init();
        let info = ComicInfo::from_reader(FIXTURE.as_bytes())?;

        assert_eq!(info.series.as_deref(), Some("Berserk"));
        assert_eq!(info.count, Some(41));
        assert_eq!(info.language_iso.as_deref(), Some("ja"));
        assert_eq!(info.black_and_white, Some(YesNo::Yes));
        assert_eq!(info.age_rating, Some(AgeRatingType::Mature17Plus));
        assert_eq!(info.community_rating, Some(Rating::new(4.75)));
        assert_eq!(info.main_character_or_team.as_deref(), Some("Guts"));
        assert!(info.is_right_to_left());

        assert_eq!(info.pages.len(), 4);
        let first = &info.pages.as_slice()[0];
        assert_eq!(first.image_size, 734_112);
        assert_eq!((first.image_width, first.image_height), (1200, 1800));
        assert_eq!(info.pages.visible().count(), 3);
        assert_eq!(info.pages.as_slice()[3].bookmark, "scanner credits");

        assert_eq!(ComicInfo::from_xml(&info.to_xml()?)?, info);
        Ok(())
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = ComicInfo::from_xml("<ComicInfo><Count>many</Count></ComicInfo>").unwrap_err();
        assert!(matches!(err, crate::Error::Decode(_)));

        let err = ComicInfo::from_xml(r#"<ComicInfo><Pages><Page Type="Story"/></Pages></ComicInfo>"#)
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to read ComicInfo"));
    }
}
