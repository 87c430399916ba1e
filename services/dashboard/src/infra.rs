use chrono::NaiveDate;
use clap::Args;
use eviction_scorecard::config::AppConfig;
use eviction_scorecard::dashboard::{PickerScope, ThemeName};
use eviction_scorecard::error::AppError;
use eviction_scorecard::geography::{
    load_dataset, load_with_fallback, spawn_source_probe, BoundaryDataset, GeographySource,
    GeographySources, HttpTransport,
};
use eviction_scorecard::scoring::{ScoreTableImporter, Scorecard};
use eviction_scorecard::telemetry;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Flags shared by every command; each one overrides its environment variable.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonArgs {
    /// Visual theme (light or dark)
    #[arg(long)]
    pub(crate) theme: Option<ThemeName>,
    /// CSV (region,indicator,score) replacing the standard score table
    #[arg(long)]
    pub(crate) scores_csv: Option<PathBuf>,
    /// Regions listed in the province picker (all or provinces)
    #[arg(long)]
    pub(crate) picker_scope: Option<PickerScope>,
    /// Remote boundary dataset probed at session start
    #[arg(long)]
    pub(crate) primary_geo_url: Option<String>,
    /// Local GeoJSON used when the remote dataset is unavailable
    #[arg(long)]
    pub(crate) fallback_geo: Option<PathBuf>,
}

/// Loads configuration, applies flag overrides and installs tracing.
pub(crate) fn prepare(common: CommonArgs) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;

    if let Some(theme) = common.theme {
        config.dashboard.theme = theme;
    }
    if let Some(scope) = common.picker_scope {
        config.dashboard.picker_scope = scope;
    }
    if let Some(url) = common.primary_geo_url {
        config.geography.primary_url = url;
    }
    if let Some(path) = common.fallback_geo {
        config.geography.fallback_path = Some(path);
    }
    if let Some(path) = common.scores_csv {
        config.scores_csv = Some(path);
    }

    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "configuration loaded");
    Ok(config)
}

pub(crate) fn load_scorecard(config: &AppConfig) -> Result<Scorecard, AppError> {
    let scorecard = Scorecard::standard();
    let Some(path) = &config.scores_csv else {
        return Ok(scorecard);
    };
    let table = ScoreTableImporter::from_path(path)?;
    info!(path = %path.display(), entries = table.len(), "score table imported");
    Ok(scorecard.with_scores(table))
}

/// Probes the primary source, waits for the verdict and loads whichever source won.
pub(crate) async fn settled_geography(
    sources: &GeographySources,
    offline: bool,
) -> Result<(GeographySource, BoundaryDataset), AppError> {
    let transport = Arc::new(HttpTransport::new());
    if offline {
        let dataset = load_dataset(transport.as_ref(), &sources.fallback).await?;
        return Ok((sources.fallback.clone(), dataset));
    }
    let current = spawn_source_probe(Arc::clone(&transport), sources.clone())
        .settled()
        .await;
    Ok(load_with_fallback(transport.as_ref(), &current, sources).await?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_date(" 2025-03-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"))
        );
        assert!(parse_date("03/01/2025").is_err());
    }
}
