use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical two-letter code for one of the ten provinces or three territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionCode {
    BC,
    AB,
    SK,
    MB,
    ON,
    QC,
    NB,
    NS,
    PE,
    NL,
    YT,
    NT,
    NU,
}

impl RegionCode {
    pub const fn ordered() -> [Self; 13] {
        [
            Self::BC,
            Self::AB,
            Self::SK,
            Self::MB,
            Self::ON,
            Self::QC,
            Self::NB,
            Self::NS,
            Self::PE,
            Self::NL,
            Self::YT,
            Self::NT,
            Self::NU,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BC => "BC",
            Self::AB => "AB",
            Self::SK => "SK",
            Self::MB => "MB",
            Self::ON => "ON",
            Self::QC => "QC",
            Self::NB => "NB",
            Self::NS => "NS",
            Self::PE => "PE",
            Self::NL => "NL",
            Self::YT => "YT",
            Self::NT => "NT",
            Self::NU => "NU",
        }
    }

    pub const fn kind(self) -> RegionKind {
        match self {
            Self::YT | Self::NT | Self::NU => RegionKind::Territory,
            _ => RegionKind::Province,
        }
    }

    /// Parses a code case-insensitively, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Province,
    Territory,
}

#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub code: RegionCode,
    pub display_name: &'static str,
    pub kind: RegionKind,
}

/// The ten scored policy dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    NoticeTermination,
    HearingDecision,
    OrderPossession,
    RentControl,
    AboveGuideline,
    EvictionTypes,
    Compensation,
    Appeals,
    OnusFiling,
    ConditionalOrders,
}

impl IndicatorId {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::NoticeTermination,
            Self::HearingDecision,
            Self::OrderPossession,
            Self::RentControl,
            Self::AboveGuideline,
            Self::EvictionTypes,
            Self::Compensation,
            Self::Appeals,
            Self::OnusFiling,
            Self::ConditionalOrders,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoticeTermination => "notice_termination",
            Self::HearingDecision => "hearing_decision",
            Self::OrderPossession => "order_possession",
            Self::RentControl => "rent_control",
            Self::AboveGuideline => "above_guideline",
            Self::EvictionTypes => "eviction_types",
            Self::Compensation => "compensation",
            Self::Appeals => "appeals",
            Self::OnusFiling => "onus_filing",
            Self::ConditionalOrders => "conditional_orders",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for IndicatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength of tenant protection, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(1);
    pub const MAX: Score = Score(5);
    /// Value used whenever a region/indicator pair has no entry.
    pub const MODERATE: Score = Score(3);

    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 5 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Score> {
        (1..=5).map(Score)
    }

    pub fn color(self) -> &'static str {
        super::palette::color_of(Some(self.0))
    }

    pub const fn level_label(self) -> &'static str {
        match self.0 {
            1 => "Minimal protections",
            2 => "Limited protections",
            3 => "Moderate protections",
            4 => "Strong protections",
            _ => "Comprehensive protections",
        }
    }

    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Criterion {
    pub label: &'static str,
    pub text: &'static str,
}

/// Per-level criteria explaining how a score on one indicator is earned.
#[derive(Debug, Clone, Serialize)]
pub struct Rubric {
    levels: [&'static [Criterion]; 5],
}

impl Rubric {
    pub const fn new(levels: [&'static [Criterion]; 5]) -> Self {
        Self { levels }
    }

    pub fn criteria_for(&self, score: Score) -> &'static [Criterion] {
        self.levels[score.index()]
    }

    pub fn levels(&self) -> impl Iterator<Item = (Score, &'static [Criterion])> + '_ {
        Score::all().map(move |score| (score, self.criteria_for(score)))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Indicator {
    pub id: IndicatorId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub score_descriptions: [&'static str; 5],
    pub rubric: Option<Rubric>,
}

impl Indicator {
    pub fn describe(&self, score: Score) -> &'static str {
        self.score_descriptions[score.index()]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneralFact {
    pub short: &'static str,
    pub details: &'static str,
    pub reference: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfficialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// Procedural background shown next to a region's scores.
#[derive(Debug, Clone, Serialize)]
pub struct RegionProfile {
    pub code: RegionCode,
    pub tribunal: &'static str,
    pub onus: GeneralFact,
    pub fee: GeneralFact,
    pub links: Vec<OfficialLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceLink {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rejects_values_outside_scale() {
        assert!(Score::new(0).is_none());
        assert!(Score::new(6).is_none());
        assert_eq!(Score::new(5), Some(Score::MAX));
        assert_eq!(Score::all().count(), 5);
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!(RegionCode::parse(" pe "), Some(RegionCode::PE));
        assert_eq!(RegionCode::parse("XX"), None);
        assert_eq!(IndicatorId::parse("RENT_CONTROL"), Some(IndicatorId::RentControl));
        assert_eq!(IndicatorId::parse("rent"), None);
    }

    #[test]
    fn territories_are_flagged() {
        let territories: Vec<_> = RegionCode::ordered()
            .into_iter()
            .filter(|code| code.kind() == RegionKind::Territory)
            .collect();
        assert_eq!(territories, vec![RegionCode::YT, RegionCode::NT, RegionCode::NU]);
    }
}
