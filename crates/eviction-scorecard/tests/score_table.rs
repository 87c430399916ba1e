use eviction_scorecard::scoring::{
    color_of, legend, IndicatorId, RegionCode, Score, ScoreTable, ScoreTableImporter, Scorecard,
    NO_DATA_COLOR, NO_DESCRIPTION,
};
use std::collections::HashSet;

#[test]
fn standard_table_is_fully_populated_and_in_range() {
    let scorecard = Scorecard::standard();
    assert_eq!(scorecard.scores().len(), 130);
    assert!(scorecard.scores().missing_pairs().is_empty());
    for region in RegionCode::ordered() {
        for indicator in IndicatorId::ordered() {
            let value = scorecard.score(region, indicator).value();
            assert!((1..=5).contains(&value));
        }
    }
}

#[test]
fn absent_pairs_read_as_three() {
    let mut table = ScoreTable::default();
    table.insert(RegionCode::PE, IndicatorId::RentControl, Score::MAX);
    let scorecard = Scorecard::standard().with_scores(table);

    assert_eq!(scorecard.score(RegionCode::PE, IndicatorId::RentControl), Score::MAX);
    for region in RegionCode::ordered() {
        for indicator in IndicatorId::ordered() {
            if (region, indicator) != (RegionCode::PE, IndicatorId::RentControl) {
                assert_eq!(scorecard.score(region, indicator).value(), 3);
            }
        }
    }
}

#[test]
fn color_ramp_is_total_and_stable() {
    let colors: Vec<_> = (1..=5).map(|v| color_of(Some(v))).collect();
    assert_eq!(colors, ["#ef4444", "#f97316", "#eab308", "#84cc16", "#22c55e"]);
    assert_eq!(colors.iter().collect::<HashSet<_>>().len(), 5);
    for outside in [None, Some(0), Some(6), Some(255)] {
        assert_eq!(color_of(outside), NO_DATA_COLOR);
        assert_eq!(color_of(outside), color_of(outside));
    }
    assert!(!colors.contains(&NO_DATA_COLOR));

    let labels: Vec<_> = legend().into_iter().map(|entry| entry.label).collect();
    assert_eq!(labels.first(), Some(&"Minimal protections"));
    assert_eq!(labels.last(), Some(&"Comprehensive protections"));
}

#[test]
fn explanations_never_fail() {
    let scorecard = Scorecard::standard();
    for indicator in IndicatorId::ordered() {
        for score in 1..=5 {
            assert_ne!(scorecard.explanation_of(indicator.as_str(), score), NO_DESCRIPTION);
        }
    }
    assert_eq!(scorecard.explanation_of("not_an_indicator", 2), NO_DESCRIPTION);
}

#[test]
fn csv_import_replaces_scores_and_validates_rows() {
    let csv = "region,indicator,score\nPE,rent_control,2\nab,rent_control,4\n";
    let table = ScoreTableImporter::from_reader(csv.as_bytes()).expect("csv imports");
    let scorecard = Scorecard::standard().with_scores(table);
    assert_eq!(scorecard.score(RegionCode::PE, IndicatorId::RentControl).value(), 2);
    assert_eq!(scorecard.score(RegionCode::AB, IndicatorId::RentControl).value(), 4);
    assert_eq!(scorecard.score(RegionCode::ON, IndicatorId::RentControl).value(), 3);

    let bad = "region,indicator,score\nPE,rent_control,7\n";
    assert!(ScoreTableImporter::from_reader(bad.as_bytes()).is_err());
}
