//! Dataset Loader
//!
//! Fetches the indicator CSV once at startup and parses it into a `Table`.
//! Sources are either HTTP(S) URLs or local files; any failure is a
//! `LoadError` and there is no retry.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;

use super::error::{LoadError, LoadResult};
use super::table::Table;
use super::types::{Continent, Row};

/// Where the raw CSV text comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs
    fn describe(&self) -> String;

    /// Retrieve the full CSV text
    async fn fetch(&self) -> LoadResult<String>;
}

/// CSV served over HTTP(S)
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> LoadResult<String> {
        let fetch_error = |e: reqwest::Error| LoadError::Fetch {
            url: self.url.clone(),
            error: e.to_string(),
        };

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(fetch_error)?;

        let response = client.get(&self.url).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(fetch_error)
    }
}

/// CSV stored on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> LoadResult<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Pick a source for a location string: URLs go over HTTP, anything else
/// is a file path (a `file://` prefix is stripped).
pub fn source_for(location: &str, timeout: Duration) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location, timeout))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        Box::new(FileSource::new(path))
    }
}

/// Fetch and parse the table from a source
pub async fn load_from(source: &dyn DatasetSource) -> LoadResult<Table> {
    tracing::info!(source = %source.describe(), "Loading dataset");

    let text = source.fetch().await?;
    let table = parse_csv(&text)?;

    tracing::info!(
        source = %source.describe(),
        "Dataset loaded: {}",
        table.summary()
    );
    Ok(table)
}

/// Fetch and parse the table from a location string
pub async fn load_table(location: &str, timeout: Duration) -> LoadResult<Table> {
    let source = source_for(location, timeout);
    load_from(source.as_ref()).await
}

/// Column positions of the required fields in the header row
struct ColumnMap {
    country: usize,
    continent: usize,
    year: usize,
    population: usize,
    life_expectancy: usize,
    gdp_per_capita: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            country: find("country")?,
            continent: find("continent")?,
            year: find("year")?,
            population: find("pop")?,
            life_expectancy: find("lifeExp")?,
            gdp_per_capita: find("gdpPercap")?,
        })
    }
}

/// Parse CSV text into a table.
///
/// The header must name `country`, `continent`, `year`, `pop`, `lifeExp`
/// and `gdpPercap`; column order is free and extra columns are ignored.
/// The first malformed row aborts the load.
pub fn parse_csv(text: &str) -> LoadResult<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push(parse_row(&record, &columns, line)?);
    }

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(Table::new(rows))
}

fn parse_row(record: &csv::StringRecord, columns: &ColumnMap, line: u64) -> LoadResult<Row> {
    let field = |index: usize| record.get(index).unwrap_or("");
    let invalid = |column: &'static str, value: &str| LoadError::InvalidField {
        line,
        column,
        value: value.to_string(),
    };

    let country = field(columns.country);
    if country.is_empty() {
        return Err(invalid("country", country));
    }

    let continent_str = field(columns.continent);
    let continent: Continent = continent_str
        .parse()
        .map_err(|_| invalid("continent", continent_str))?;

    let year_str = field(columns.year);
    let year: i32 = year_str.parse().map_err(|_| invalid("year", year_str))?;

    let pop_str = field(columns.population);
    let population = parse_population(pop_str).ok_or_else(|| invalid("pop", pop_str))?;

    let life_str = field(columns.life_expectancy);
    let life_expectancy = parse_real(life_str).ok_or_else(|| invalid("lifeExp", life_str))?;

    let gdp_str = field(columns.gdp_per_capita);
    let gdp_per_capita = parse_real(gdp_str).ok_or_else(|| invalid("gdpPercap", gdp_str))?;

    Ok(Row::new(
        country,
        continent,
        year,
        population,
        life_expectancy,
        gdp_per_capita,
    ))
}

/// Integer text, or float text holding a whole positive number (`1.2e7`)
fn parse_population(s: &str) -> Option<u64> {
    if let Ok(n) = s.parse::<u64>() {
        return Some(n).filter(|&n| n > 0);
    }
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value >= 1.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// Finite and strictly positive
fn parse_real(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}
