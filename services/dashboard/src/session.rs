use crate::infra::{load_scorecard, prepare, CommonArgs};
use crate::report::describe_panel;
use clap::Args;
use eviction_scorecard::dashboard::{Dashboard, IndicatorOrigin, SelectionEvent};
use eviction_scorecard::error::AppError;
use eviction_scorecard::geography::{
    load_dataset, load_with_fallback, spawn_source_probe, GeographySource, HttpTransport,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Args, Debug)]
pub(crate) struct SessionArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
    /// Skip the remote probe and use the fallback boundaries
    #[arg(long)]
    pub(crate) offline: bool,
}

const HELP: &str = "\
commands:
  indicator <id> [dialog]   choose an indicator (from the dialog closes it)
  select <code|name>        open a region's detail dialog
  click <x> <y>             click the map at a canvas pixel
  hover <x> <y>             move the pointer over the map
  zoom in|out               step the zoom level
  pan <dx> <dy>             drag the map by a pixel delta
  reset                     restore the default view
  close                     close the detail dialog
  dropdown                  toggle the province picker
  search [text]             filter regions by name (empty clears)
  show                      print the current state
  quit                      end the session";

#[derive(Debug, Clone, PartialEq)]
enum SessionCommand {
    Indicator { id: String, origin: IndicatorOrigin },
    Select(String),
    Click(f64, f64),
    Hover(f64, f64),
    Event(SelectionEvent),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("indicator", [id]) => SessionCommand::Indicator {
            id: (*id).to_string(),
            origin: IndicatorOrigin::Sidebar,
        },
        ("indicator", [id, "dialog"]) => SessionCommand::Indicator {
            id: (*id).to_string(),
            origin: IndicatorOrigin::Dialog,
        },
        ("select", words) if !words.is_empty() => SessionCommand::Select(words.join(" ")),
        ("click", [x, y]) => {
            let (x, y) = parse_pair(x, y)?;
            SessionCommand::Click(x, y)
        }
        ("hover", [x, y]) => {
            let (x, y) = parse_pair(x, y)?;
            SessionCommand::Hover(x, y)
        }
        ("zoom", ["in"]) => SessionCommand::Event(SelectionEvent::ZoomIn),
        ("zoom", ["out"]) => SessionCommand::Event(SelectionEvent::ZoomOut),
        ("pan", [dx, dy]) => {
            let (dx, dy) = parse_pair(dx, dy)?;
            SessionCommand::Event(SelectionEvent::Pan { dx, dy })
        }
        ("reset", []) => SessionCommand::Event(SelectionEvent::ResetView),
        ("close", []) => SessionCommand::Event(SelectionEvent::CloseDialog),
        ("dropdown", []) => SessionCommand::Event(SelectionEvent::ToggleDropdown),
        ("search", words) => SessionCommand::Event(SelectionEvent::Search(words.join(" "))),
        ("show", []) => SessionCommand::Show,
        ("help", []) => SessionCommand::Help,
        ("quit" | "exit", []) => SessionCommand::Quit,
        _ => return Err(format!("unrecognized command '{}'", line.trim())),
    };
    Ok(Some(command))
}

fn parse_pair(a: &str, b: &str) -> Result<(f64, f64), String> {
    let parse = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| format!("'{raw}' is not a number"))
    };
    Ok((parse(a)?, parse(b)?))
}

pub(crate) async fn run_session(args: SessionArgs) -> Result<(), AppError> {
    let config = prepare(args.common)?;
    let scorecard = Arc::new(load_scorecard(&config)?);
    let sources = config.geography.sources();
    let transport = Arc::new(HttpTransport::new());

    // Offline sessions never probe; the receiver then never changes.
    let (mut probe_updates, initial) = if args.offline {
        let (_, receiver) = watch::channel(sources.fallback.clone());
        (receiver, sources.fallback.clone())
    } else {
        let probe = spawn_source_probe(Arc::clone(&transport), sources.clone());
        (probe.subscribe(), probe.current())
    };

    let (source, dataset) = load_with_fallback(transport.as_ref(), &initial, &sources).await?;
    let mut dashboard = Dashboard::new(scorecard, dataset, source, config.dashboard.options());
    info!(source = %dashboard.source(), "session started");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let switched = {
            let latest = probe_updates.borrow_and_update();
            latest.has_changed().then(|| (*latest).clone())
        };
        if let Some(source) = switched {
            switch_geography(&mut dashboard, transport.as_ref(), source).await;
        }

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message} (try 'help')");
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Show => print!("{}", describe_state(&dashboard)),
            SessionCommand::Indicator { id, origin } => {
                match dashboard.choose_indicator(&id, origin) {
                    Ok(indicator) => println!("indicator: {indicator}"),
                    Err(err) => println!("{err}"),
                }
            }
            SessionCommand::Select(raw) => match dashboard.select_region(&raw) {
                Ok(_) => print!("{}", describe_state(&dashboard)),
                Err(err) => println!("{err}"),
            },
            SessionCommand::Click(x, y) => match dashboard.click(x, y) {
                Some(_) => print!("{}", describe_state(&dashboard)),
                None => println!("nothing selectable at ({x}, {y})"),
            },
            SessionCommand::Hover(x, y) => match dashboard.hover_at(x, y) {
                Some(region) => println!("hovering {}", dashboard.scorecard().display_name(region)),
                None => println!("hovering nothing"),
            },
            SessionCommand::Event(event) => {
                dashboard.dispatch(event);
                let viewport = dashboard.state().viewport();
                let (lon, lat) = viewport.center();
                println!("view: center ({lon:.2}, {lat:.2}) zoom {:.2}", viewport.zoom());
            }
        }
    }

    info!("session ended");
    Ok(())
}

async fn switch_geography(
    dashboard: &mut Dashboard,
    transport: &HttpTransport,
    source: GeographySource,
) {
    if &source == dashboard.source() {
        return;
    }
    match load_dataset(transport, &source).await {
        Ok(dataset) => {
            dashboard.set_geography(source, dataset);
            println!("map boundaries now from {}", dashboard.source());
        }
        Err(err) => warn!(
            error = %err,
            %source,
            "fallback geography failed to load; keeping current map"
        ),
    }
}

fn describe_state(dashboard: &Dashboard) -> String {
    let state = dashboard.state();
    let scorecard = dashboard.scorecard();
    let mut out = String::new();

    let indicator_name = scorecard
        .indicator(state.indicator())
        .map_or(state.indicator().as_str(), |indicator| indicator.name);
    out.push_str(&format!("indicator: {indicator_name}\n"));

    if !state.query().trim().is_empty() {
        let matches: Vec<_> = dashboard
            .filtered_regions()
            .into_iter()
            .map(|code| code.as_str())
            .collect();
        out.push_str(&format!("search '{}': {}\n", state.query(), matches.join(", ")));
    }

    if state.dropdown_open() {
        out.push_str("picker:\n");
        for entry in dashboard.picker() {
            out.push_str(&format!("  {} {} [{}]\n", entry.code, entry.name, entry.score));
        }
    }

    match (state.dialog_open(), dashboard.detail_panel()) {
        (true, Some(panel)) => out.push_str(&describe_panel(&panel)),
        (false, Some(panel)) => out.push_str(&format!(
            "last region: {} ({}/5, dialog closed)\n",
            panel.region_name, panel.score
        )),
        _ => out.push_str("no region selected\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_indicator_with_origin() {
        assert_eq!(
            parse_command("indicator rent_control dialog"),
            Ok(Some(SessionCommand::Indicator {
                id: "rent_control".into(),
                origin: IndicatorOrigin::Dialog,
            }))
        );
    }

    #[test]
    fn region_names_may_contain_spaces() {
        assert_eq!(
            parse_command("select Prince Edward Island"),
            Ok(Some(SessionCommand::Select("Prince Edward Island".into())))
        );
    }

    #[test]
    fn viewport_commands_map_to_events() {
        assert_eq!(
            parse_command("zoom in"),
            Ok(Some(SessionCommand::Event(SelectionEvent::ZoomIn)))
        );
        assert_eq!(
            parse_command("pan 10 -5.5"),
            Ok(Some(SessionCommand::Event(SelectionEvent::Pan { dx: 10.0, dy: -5.5 })))
        );
        assert_eq!(
            parse_command("search"),
            Ok(Some(SessionCommand::Event(SelectionEvent::Search(String::new()))))
        );
    }

    #[test]
    fn blank_and_bad_lines() {
        assert_eq!(parse_command("   "), Ok(None));
        assert!(parse_command("zoom sideways").is_err());
        assert!(parse_command("click 1 NaN").is_err());
        assert!(parse_command("click 1").is_err());
    }
}
