use crate::render::{run_render, RenderArgs};
use crate::report::{run_province, run_scores, ProvinceArgs, ScoresArgs};
use crate::session::{run_session, SessionArgs};
use clap::{Parser, Subcommand};
use eviction_scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "scorecard",
    about = "Explore the Canadian eviction-law scorecard from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the dashboard as a static HTML page (default command)
    Render(RenderArgs),
    /// Print the full region by indicator score matrix
    Scores(ScoresArgs),
    /// Show the detail panel for one province or territory
    Province(ProvinceArgs),
    /// Drive an interactive dashboard session from stdin
    Session(SessionArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Render(RenderArgs::default()));

    match command {
        Command::Render(args) => run_render(args).await,
        Command::Scores(args) => run_scores(args),
        Command::Province(args) => run_province(args),
        Command::Session(args) => run_session(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_province_with_indicator() {
        let cli = Cli::try_parse_from([
            "scorecard",
            "province",
            "PE",
            "--indicator",
            "rent_control",
        ])
        .expect("arguments parse");
        match cli.command {
            Some(Command::Province(args)) => {
                assert_eq!(args.region, "PE");
                assert_eq!(args.indicator.as_deref(), Some("rent_control"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
