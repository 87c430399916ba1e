use super::dataset::BoundaryFeature;
use crate::scoring::RegionCode;
use serde::Serialize;
use std::collections::HashMap;

/// Property keys that may carry the region name, highest priority first.
const NAME_KEYS: [NameKey; 4] = [
    NameKey::Plain("PRENAME"),
    NameKey::Plain("name"),
    NameKey::Plain("NAME"),
    NameKey::Bilingual("PRNAME"),
];

const BILINGUAL_DELIMITER: char = '/';

#[derive(Debug, Clone, Copy)]
enum NameKey {
    Plain(&'static str),
    Bilingual(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "code")]
pub enum Resolution {
    Resolved(RegionCode),
    Unresolved,
}

impl Resolution {
    pub fn code(self) -> Option<RegionCode> {
        match self {
            Resolution::Resolved(code) => Some(code),
            Resolution::Unresolved => None,
        }
    }
}

const NAME_TO_REGION: &[(&str, RegionCode)] = &[
    ("British Columbia", RegionCode::BC),
    ("Colombie-Britannique", RegionCode::BC),
    ("Alberta", RegionCode::AB),
    ("Saskatchewan", RegionCode::SK),
    ("Manitoba", RegionCode::MB),
    ("Ontario", RegionCode::ON),
    ("Quebec", RegionCode::QC),
    ("Québec", RegionCode::QC),
    ("New Brunswick", RegionCode::NB),
    ("Nouveau-Brunswick", RegionCode::NB),
    ("Nova Scotia", RegionCode::NS),
    ("Nouvelle-Écosse", RegionCode::NS),
    ("Nouvelle-Ecosse", RegionCode::NS),
    ("Prince Edward Island", RegionCode::PE),
    ("Île-du-Prince-Édouard", RegionCode::PE),
    ("Ile-du-Prince-Edouard", RegionCode::PE),
    ("Newfoundland and Labrador", RegionCode::NL),
    ("Newfoundland & Labrador", RegionCode::NL),
    ("Terre-Neuve-et-Labrador", RegionCode::NL),
    ("Yukon", RegionCode::YT),
    ("Yukon Territory", RegionCode::YT),
    ("Northwest Territories", RegionCode::NT),
    ("Territoires du Nord-Ouest", RegionCode::NT),
    ("Nunavut", RegionCode::NU),
];

/// Maps boundary feature names onto region codes.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    names: HashMap<String, RegionCode>,
}

impl RegionResolver {
    pub fn standard() -> Self {
        let names = NAME_TO_REGION
            .iter()
            .map(|(name, code)| (normalize_name(name), *code))
            .collect();
        Self { names }
    }

    pub fn resolve_name(&self, name: &str) -> Resolution {
        self.names
            .get(&normalize_name(name))
            .map_or(Resolution::Unresolved, |code| Resolution::Resolved(*code))
    }

    /// Free-text region choice: a two-letter code first, then any known name.
    pub fn resolve_code_or_name(&self, raw: &str) -> Option<RegionCode> {
        RegionCode::parse(raw).or_else(|| self.resolve_name(raw).code())
    }

    pub fn resolve_feature(&self, feature: &BoundaryFeature) -> Resolution {
        feature_name(feature).map_or(Resolution::Unresolved, |name| self.resolve_name(&name))
    }

    /// Every spelling the resolver accepts, with its code.
    pub fn known_names() -> impl Iterator<Item = (&'static str, RegionCode)> {
        NAME_TO_REGION.iter().copied()
    }
}

impl Default for RegionResolver {
    fn default() -> Self {
        Self::standard()
    }
}

/// First non-empty name found in the feature's properties, then its id.
pub fn feature_name(feature: &BoundaryFeature) -> Option<String> {
    NAME_KEYS
        .iter()
        .find_map(|key| match key {
            NameKey::Plain(key) => feature
                .property_str(key)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_owned),
            NameKey::Bilingual(key) => feature
                .property_str(key)
                .and_then(first_segment)
                .map(str::to_owned),
        })
        .or_else(|| feature.id.clone().filter(|id| !id.trim().is_empty()))
}

fn first_segment(combined: &str) -> Option<&str> {
    combined
        .split(BILINGUAL_DELIMITER)
        .next()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn feature(properties: Value, id: Option<&str>) -> BoundaryFeature {
        let properties: Map<String, Value> = match properties {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        BoundaryFeature {
            id: id.map(str::to_owned),
            properties,
            geometry: geo::MultiPolygon::new(Vec::new()),
        }
    }

    #[test]
    fn bilingual_field_uses_first_segment() {
        let f = feature(json!({ "PRNAME": "Québec/Quebec" }), None);
        assert_eq!(feature_name(&f).as_deref(), Some("Québec"));

        let f = feature(json!({ "PRNAME": "  Nova Scotia / Nouvelle-Écosse" }), None);
        assert_eq!(feature_name(&f).as_deref(), Some("Nova Scotia"));
    }

    #[test]
    fn key_priority_is_fixed() {
        let f = feature(
            json!({ "PRNAME": "Ontario / Ontario", "NAME": "Manitoba", "name": "Alberta", "PRENAME": "Yukon" }),
            Some("Nunavut"),
        );
        assert_eq!(feature_name(&f).as_deref(), Some("Yukon"));

        let f = feature(json!({ "PRENAME": "", "NAME": "Manitoba", "PRNAME": "Ontario" }), None);
        assert_eq!(feature_name(&f).as_deref(), Some("Manitoba"));

        let f = feature(json!({ "PRENAME": 12 }), Some("Nunavut"));
        assert_eq!(feature_name(&f).as_deref(), Some("Nunavut"));

        let f = feature(json!({}), None);
        assert_eq!(feature_name(&f), None);
    }

    #[test]
    fn accented_and_plain_spellings_share_a_code() {
        let resolver = RegionResolver::standard();
        assert_eq!(resolver.resolve_name("Québec"), Resolution::Resolved(RegionCode::QC));
        assert_eq!(resolver.resolve_name("Quebec"), Resolution::Resolved(RegionCode::QC));
        assert_eq!(
            resolver.resolve_name("\u{feff}prince  edward island"),
            Resolution::Resolved(RegionCode::PE)
        );
    }

    #[test]
    fn unknown_names_are_unresolved() {
        let resolver = RegionResolver::standard();
        assert_eq!(resolver.resolve_name("Hudson Bay"), Resolution::Unresolved);
        assert_eq!(resolver.resolve_name(""), Resolution::Unresolved);
        assert_eq!(Resolution::Unresolved.code(), None);
    }

    #[test]
    fn resolves_whole_features() {
        let resolver = RegionResolver::standard();
        let f = feature(
            json!({ "PRNAME": "Newfoundland and Labrador / Terre-Neuve-et-Labrador" }),
            None,
        );
        assert_eq!(resolver.resolve_feature(&f), Resolution::Resolved(RegionCode::NL));

        let f = feature(json!({ "name": "Lake Winnipeg" }), None);
        assert_eq!(resolver.resolve_feature(&f), Resolution::Unresolved);
    }

    #[test]
    fn free_text_accepts_codes_before_names() {
        let resolver = RegionResolver::standard();
        assert_eq!(resolver.resolve_code_or_name(" nl "), Some(RegionCode::NL));
        assert_eq!(resolver.resolve_code_or_name("nouvelle-écosse"), Some(RegionCode::NS));
        assert_eq!(resolver.resolve_code_or_name("Yukon Territory"), Some(RegionCode::YT));
        assert_eq!(resolver.resolve_code_or_name("Atlantis"), None);
        assert_eq!(resolver.resolve_code_or_name(""), None);
    }
}
