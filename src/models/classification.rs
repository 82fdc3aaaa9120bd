use super::open_enum::open_enum;

open_enum! {
    /// Tri-state flag used by `BlackAndWhite`.
    pub enum YesNo {
        Yes => "Yes",
        No => "No",
        Unknown => "Unknown",
    }
}

impl Default for YesNo {
    fn default() -> Self {
        YesNo::Unknown
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

open_enum! {
    /// Whether the book is manga, and if so whether it reads right to left.
    pub enum MangaType {
        Unknown => "Unknown",
        No => "No",
        Yes => "Yes",
        YesAndRightToLeft => "YesAndRightToLeft",
    }
}

impl MangaType {
    pub fn is_right_to_left(&self) -> bool {
        matches!(self, MangaType::YesAndRightToLeft)
    }
}

impl Default for MangaType {
    fn default() -> Self {
        MangaType::Unknown
    }
}

open_enum! {
    /// Age rating label. The labels are borrowed loosely from several real
    /// rating systems (ESRB, the Australian Classification Board, Eirin) and
    /// are not interpreted here.
    pub enum AgeRatingType {
        Unknown => "Unknown",
        /// JAST USA "Adults Only".
        AdultsOnly18Plus => "Adults Only 18+",
        /// ESRB Early Childhood.
        EarlyChildhood => "Early Childhood",
        /// ESRB Everyone.
        Everyone => "Everyone",
        /// ESRB Everyone 10+.
        Everyone10Plus => "Everyone 10+",
        G => "G",
        /// Older name for ESRB Everyone, spelled "Kids To Adults" at the time.
        KidsToAdults => "Kids to Adults",
        M => "M",
        /// Australian MA 15+.
        MA15Plus => "MA15+",
        /// ESRB Mature 17+.
        Mature17Plus => "Mature 17+",
        PG => "PG",
        /// Australian R18+ or Eirin R18+.
        R18Plus => "R18+",
        RatingPending => "Rating Pending",
        /// ESRB Teen.
        Teen => "Teen",
        /// Australian X 18+.
        X18Plus => "X18+",
    }
}

impl Default for AgeRatingType {
    fn default() -> Self {
        AgeRatingType::Unknown
    }
}
