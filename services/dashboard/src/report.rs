use crate::infra::{load_scorecard, prepare, CommonArgs};
use clap::{Args, ValueEnum};
use eviction_scorecard::dashboard::{
    detail_panel, DetailPanel, IndicatorOrigin, SelectionError, SelectionEvent, SelectionState,
};
use eviction_scorecard::error::AppError;
use eviction_scorecard::geography::{EqualEarth, RegionResolver};
use eviction_scorecard::scoring::import::write_csv;
use eviction_scorecard::scoring::{IndicatorId, RegionCode, Scorecard};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScoresFormat {
    #[default]
    Table,
    Csv,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct ScoresArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
    /// Output format
    #[arg(long, value_enum, default_value_t = ScoresFormat::Table)]
    pub(crate) format: ScoresFormat,
}

#[derive(Args, Debug)]
pub(crate) struct ProvinceArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
    /// Region code (e.g. PE) or name (e.g. "Nova Scotia")
    pub(crate) region: String,
    /// Indicator whose rubric is expanded (defaults to the first indicator)
    #[arg(long)]
    pub(crate) indicator: Option<String>,
    /// Emit the panel as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Serialize)]
struct ScoreRecord {
    region: RegionCode,
    indicator: IndicatorId,
    score: u8,
}

pub(crate) fn run_scores(args: ScoresArgs) -> Result<(), AppError> {
    let config = prepare(args.common)?;
    let scorecard = load_scorecard(&config)?;

    match args.format {
        ScoresFormat::Table => print!("{}", score_matrix(&scorecard)),
        ScoresFormat::Csv => write_csv(scorecard.scores(), std::io::stdout().lock())?,
        ScoresFormat::Json => {
            let records: Vec<ScoreRecord> = RegionCode::ordered()
                .into_iter()
                .flat_map(|region| {
                    IndicatorId::ordered()
                        .into_iter()
                        .map(move |indicator| (region, indicator))
                })
                .map(|(region, indicator)| ScoreRecord {
                    region,
                    indicator,
                    score: scorecard.score(region, indicator).value(),
                })
                .collect();
            let body = serde_json::to_string_pretty(&records).map_err(std::io::Error::from)?;
            println!("{body}");
        }
    }
    Ok(())
}

/// Region rows by indicator columns, headed by indicator short names.
fn score_matrix(scorecard: &Scorecard) -> String {
    let mut out = format!("{:<28}", "Region");
    for indicator in scorecard.indicators() {
        out.push_str(&format!("{:>10}", indicator.short_name));
    }
    out.push('\n');
    for region in scorecard.regions() {
        out.push_str(&format!("{:<28}", format!("{} ({})", region.display_name, region.code)));
        for indicator in scorecard.indicators() {
            out.push_str(&format!("{:>10}", scorecard.score(region.code, indicator.id).value()));
        }
        out.push('\n');
    }
    out
}

pub(crate) fn run_province(args: ProvinceArgs) -> Result<(), AppError> {
    let ProvinceArgs {
        common,
        region,
        indicator,
        json,
    } = args;
    let config = prepare(common)?;
    let scorecard = load_scorecard(&config)?;

    let region_code = RegionResolver::standard()
        .resolve_code_or_name(&region)
        .ok_or_else(|| SelectionError::UnknownRegion(region.trim().to_string()))?;
    let projection = EqualEarth::canada();
    let mut state = SelectionState::for_scorecard(&scorecard);
    if let Some(raw) = indicator {
        let indicator = IndicatorId::parse(&raw).ok_or(SelectionError::UnknownIndicator(raw))?;
        state.apply(
            SelectionEvent::ChooseIndicator {
                indicator,
                origin: IndicatorOrigin::Sidebar,
            },
            &projection,
        );
    }
    state.apply(SelectionEvent::SelectRegion(region_code), &projection);

    let Some(panel) = detail_panel(&scorecard, &state) else {
        return Ok(());
    };
    if json {
        let body = serde_json::to_string_pretty(&panel).map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print!("{}", describe_panel(&panel));
    }
    Ok(())
}

pub(crate) fn describe_panel(panel: &DetailPanel) -> String {
    let mut out = format!("{} ({})\n", panel.region_name, panel.region);
    out.push_str(&format!(
        "{}: {}/5 {} [{}]\n  {}\n",
        panel.indicator_name, panel.score, panel.level_label, panel.color, panel.explanation
    ));

    if let Some(levels) = &panel.rubric {
        out.push_str("Scoring scale:\n");
        for level in levels {
            let marker = if level.active { ">" } else { " " };
            out.push_str(&format!("{marker} {} {}\n", level.score, level.label));
            for criterion in level.criteria {
                out.push_str(&format!("      {}: {}\n", criterion.label, criterion.text));
            }
        }
    }

    out.push_str("All indicators:\n");
    for entry in &panel.scores {
        let marker = if entry.current { "*" } else { " " };
        out.push_str(&format!("{marker} {:<36} {}\n", entry.name, entry.score));
    }

    if let Some(profile) = &panel.profile {
        out.push_str(&format!("Tribunal: {}\n", profile.tribunal));
        out.push_str(&format!("Onus to file: {}\n", profile.onus.short));
        out.push_str(&format!("Filing fee: {}\n", profile.fee.short));
        for link in &profile.links {
            out.push_str(&format!("  {} <{}>\n", link.label, link.url));
        }
    }
    for resource in &panel.resources {
        out.push_str(&format!("Resource: {} ({})\n", resource.title, resource.path));
    }
    out
}
