use crate::infra::{load_scorecard, parse_date, prepare, settled_geography, CommonArgs};
use chrono::NaiveDate;
use clap::Args;
use eviction_scorecard::dashboard::{Dashboard, IndicatorOrigin, SelectionEvent};
use eviction_scorecard::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
    /// Write the page here instead of stdout
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,
    /// Indicator id to color the map by (defaults to the first indicator)
    #[arg(long)]
    pub(crate) indicator: Option<String>,
    /// Region code or name whose detail dialog is open
    #[arg(long)]
    pub(crate) region: Option<String>,
    /// Render with the province picker open
    #[arg(long)]
    pub(crate) dropdown: bool,
    /// Search text dimming non-matching regions
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Date printed in the footer (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Skip the remote probe and use the fallback boundaries
    #[arg(long)]
    pub(crate) offline: bool,
}

struct ViewRequest {
    indicator: Option<String>,
    region: Option<String>,
    dropdown: bool,
    search: Option<String>,
}

/// Selecting a region closes the picker, so the picker opens last.
fn apply_view(dashboard: &mut Dashboard, request: ViewRequest) -> Result<(), AppError> {
    if let Some(indicator) = request.indicator {
        dashboard.choose_indicator(&indicator, IndicatorOrigin::Sidebar)?;
    }
    if let Some(query) = request.search {
        dashboard.dispatch(SelectionEvent::Search(query));
    }
    if let Some(region) = request.region {
        dashboard.select_region(&region)?;
    }
    if request.dropdown {
        dashboard.dispatch(SelectionEvent::ToggleDropdown);
    }
    Ok(())
}

pub(crate) async fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let RenderArgs {
        common,
        output,
        indicator,
        region,
        dropdown,
        search,
        as_of,
        offline,
    } = args;

    let config = prepare(common)?;
    let scorecard = Arc::new(load_scorecard(&config)?);
    let (source, dataset) = settled_geography(&config.geography.sources(), offline).await?;
    let mut dashboard = Dashboard::new(scorecard, dataset, source, config.dashboard.options());

    apply_view(
        &mut dashboard,
        ViewRequest {
            indicator,
            region,
            dropdown,
            search,
        },
    )?;

    let stamp = as_of.map(|date| format!("Scores as of {}", date.format("%B %-d, %Y")));
    let html = dashboard.render_html(stamp.as_deref());

    match output {
        Some(path) => {
            std::fs::write(&path, html)?;
            info!(path = %path.display(), source = %dashboard.source(), "dashboard rendered");
        }
        None => print!("{html}"),
    }
    Ok(())
}
