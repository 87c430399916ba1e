use super::domain::{IndicatorId, RegionCode, Score};
use super::table::ScoreTable;
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ScoreImportError {
    #[error("failed to read score table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid score CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown region code '{code}'")]
    UnknownRegion { line: u64, code: String },
    #[error("line {line}: unknown indicator id '{id}'")]
    UnknownIndicator { line: u64, id: String },
    #[error("line {line}: score {value} is outside 1..=5")]
    ScoreOutOfRange { line: u64, value: i64 },
    #[error("line {line}: duplicate entry for {region}/{indicator}")]
    Duplicate {
        line: u64,
        region: RegionCode,
        indicator: IndicatorId,
    },
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    region: String,
    indicator: String,
    score: i64,
}

pub struct ScoreTableImporter;

impl ScoreTableImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ScoreTable, ScoreImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads `region,indicator,score` rows. Pairs left out stay absent.
    pub fn from_reader<R: Read>(reader: R) -> Result<ScoreTable, ScoreImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut table = ScoreTable::default();

        for record in csv_reader.records() {
            let record = record?;
            // physical line, so blank lines and quoted newlines still count
            let line = record.position().map_or(0, csv::Position::line);
            let row: ScoreRow = record.deserialize(Some(&headers))?;

            let region = RegionCode::parse(&row.region).ok_or_else(|| {
                ScoreImportError::UnknownRegion {
                    line,
                    code: row.region.clone(),
                }
            })?;
            let indicator = IndicatorId::parse(&row.indicator).ok_or_else(|| {
                ScoreImportError::UnknownIndicator {
                    line,
                    id: row.indicator.clone(),
                }
            })?;
            let score = u8::try_from(row.score)
                .ok()
                .and_then(Score::new)
                .ok_or(ScoreImportError::ScoreOutOfRange {
                    line,
                    value: row.score,
                })?;

            if table.insert(region, indicator, score).is_some() {
                return Err(ScoreImportError::Duplicate {
                    line,
                    region,
                    indicator,
                });
            }
        }

        Ok(table)
    }
}

pub fn write_csv<W: Write>(table: &ScoreTable, writer: W) -> Result<(), ScoreImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["region", "indicator", "score"])?;
    for (region, indicator, score) in table.rows() {
        let value = score.value().to_string();
        csv_writer.write_record([region.as_str(), indicator.as_str(), value.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
