//! The in-memory indicator table
//!
//! Built once at startup and never mutated afterwards, so it is shared
//! between request handlers as a plain `Arc<Table>`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashSet};

use super::types::{Continent, Row, YearRange};

/// Read-only table of (country, year) observations
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    /// Distinct countries in order of first appearance
    countries: Vec<String>,
    loaded_at: DateTime<Utc>,
}

/// Overview of a loaded table
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub rows: usize,
    pub countries: usize,
    pub continents: Vec<Continent>,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub loaded_at: DateTime<Utc>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        let countries = {
            let mut seen = HashSet::new();
            rows.iter()
                .filter(|&row| seen.insert(row.country.as_str()))
                .map(|row| row.country.clone())
                .collect()
        };

        Self {
            rows,
            countries,
            loaded_at: Utc::now(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct countries in table order
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Distinct continents present, in category order
    pub fn continents(&self) -> Vec<Continent> {
        self.rows
            .iter()
            .map(|row| row.continent)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last year present in the table
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.rows.iter().map(|row| row.year).min()?;
        let max = self.rows.iter().map(|row| row.year).max()?;
        Some((min, max))
    }

    /// Rows inside the range, or every row when no range is active
    pub fn in_range(&self, range: Option<YearRange>) -> Vec<&Row> {
        match range {
            Some(range) => self
                .rows
                .iter()
                .filter(|row| range.contains(row.year))
                .collect(),
            None => self.rows.iter().collect(),
        }
    }

    /// One row per country: the most recent year inside the range.
    ///
    /// Rows are stably sorted by year descending and the first occurrence
    /// of each country is kept, so duplicate (country, year) rows resolve
    /// to the one that comes first in the table.
    pub fn latest_snapshot(&self, range: Option<YearRange>) -> Vec<&Row> {
        let mut rows = self.in_range(range);
        rows.sort_by_key(|row| Reverse(row.year));

        let mut seen = HashSet::new();
        rows.retain(|&row| seen.insert(row.country.as_str()));
        rows
    }

    /// Rows whose country is one of `countries`, in table order
    pub fn for_countries(&self, countries: &[String]) -> Vec<&Row> {
        let wanted: HashSet<&str> = countries.iter().map(String::as_str).collect();
        self.rows
            .iter()
            .filter(|row| wanted.contains(row.country.as_str()))
            .collect()
    }

    pub fn summary(&self) -> TableSummary {
        let span = self.year_span();
        TableSummary {
            rows: self.rows.len(),
            countries: self.countries.len(),
            continents: self.continents(),
            first_year: span.map(|(first, _)| first),
            last_year: span.map(|(_, last)| last),
            loaded_at: self.loaded_at,
        }
    }
}

impl std::fmt::Display for TableSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows, {} countries, {} continents",
            self.rows,
            self.countries,
            self.continents.len()
        )?;
        if let (Some(first), Some(last)) = (self.first_year, self.last_year) {
            write!(f, ", years {}-{}", first, last)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixtures::{sample_table, COUNTRIES};
    use std::collections::HashMap;

    #[test]
    fn test_countries_in_table_order() {
        let table = sample_table();
        let expected: Vec<String> = COUNTRIES.iter().map(|(c, _, _)| c.to_string()).collect();
        assert_eq!(table.countries(), expected.as_slice());
    }

    #[test]
    fn test_year_span() {
        let table = sample_table();
        assert_eq!(table.year_span(), Some((1997, 2007)));
        assert_eq!(Table::new(Vec::new()).year_span(), None);
    }

    #[test]
    fn test_latest_snapshot_without_range() {
        let table = sample_table();
        let snapshot = table.latest_snapshot(None);

        assert_eq!(snapshot.len(), COUNTRIES.len());
        for row in &snapshot {
            let max_year = table
                .rows()
                .iter()
                .filter(|r| r.country == row.country)
                .map(|r| r.year)
                .max()
                .unwrap();
            assert_eq!(row.year, max_year, "{}", row.country);
        }
    }

    #[test]
    fn test_latest_snapshot_respects_range() {
        let table = sample_table();
        let ranges = [
            YearRange::new(1997.0, 2002.0),
            YearRange::new(1999.5, 2001.0),
            YearRange::new(2003.0, 2007.0),
            YearRange::new(1990.0, 1996.0),
        ];

        for range in ranges {
            let snapshot = table.latest_snapshot(Some(range));

            let mut per_country: HashMap<&str, usize> = HashMap::new();
            for row in &snapshot {
                *per_country.entry(row.country.as_str()).or_default() += 1;
                assert!(range.contains(row.year));

                let expected = table
                    .rows()
                    .iter()
                    .filter(|r| r.country == row.country && range.contains(r.year))
                    .map(|r| r.year)
                    .max()
                    .unwrap();
                assert_eq!(row.year, expected);
            }
            assert!(per_country.values().all(|&n| n == 1));
        }
    }

    #[test]
    fn test_latest_snapshot_empty_range() {
        let table = sample_table();
        assert!(table
            .latest_snapshot(Some(YearRange::new(1800.0, 1801.0)))
            .is_empty());
    }

    #[test]
    fn test_latest_snapshot_duplicate_key_first_wins() {
        let table = Table::new(vec![
            Row::new("Peru", Continent::Americas, 2000, 100, 70.0, 5000.0),
            Row::new("Peru", Continent::Americas, 2000, 200, 71.0, 5100.0),
            Row::new("Peru", Continent::Americas, 1990, 90, 65.0, 4000.0),
        ]);
        let snapshot = table.latest_snapshot(None);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].population, 100);
    }

    #[test]
    fn test_for_countries() {
        let table = sample_table();
        let rows = table.for_countries(&["China".to_string(), "Nowhere".to_string()]);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.country == "China"));
        assert!(table.for_countries(&[]).is_empty());
    }

    #[test]
    fn test_summary_display() {
        let table = sample_table();
        let summary = table.summary();
        assert_eq!(summary.rows, table.len());
        assert_eq!(summary.countries, COUNTRIES.len());
        assert!(summary.to_string().contains("years 1997-2007"));
    }
}
