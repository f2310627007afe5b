//! Core data types for the indicator table
//!
//! - `Row`: one (country, year) observation
//! - `Continent`: the fixed set of continent categories
//! - `Measure`: the three numeric indicators a chart can plot
//! - `YearRange`: an inclusive year filter coming from a zoom gesture

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One (country, year) observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub country: String,
    pub continent: Continent,
    pub year: i32,
    /// Population, in people
    #[serde(rename = "pop")]
    pub population: u64,
    /// Life expectancy at birth, in years
    #[serde(rename = "lifeExp")]
    pub life_expectancy: f64,
    /// GDP per capita, in constant dollars
    #[serde(rename = "gdpPercap")]
    pub gdp_per_capita: f64,
}

impl Row {
    pub fn new(
        country: impl Into<String>,
        continent: Continent,
        year: i32,
        population: u64,
        life_expectancy: f64,
        gdp_per_capita: f64,
    ) -> Self {
        Self {
            country: country.into(),
            continent,
            year,
            population,
            life_expectancy,
            gdp_per_capita,
        }
    }

    /// Read the value of a measure from this row
    pub fn value(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Population => self.population as f64,
            Measure::LifeExpectancy => self.life_expectancy,
            Measure::GdpPerCapita => self.gdp_per_capita,
        }
    }
}

/// Continent category of a country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    /// Former Soviet Union, listed separately in the unfiltered table
    #[serde(rename = "FSU")]
    Fsu,
    Oceania,
}

impl Continent {
    /// Get all continents for iteration
    pub fn all() -> &'static [Continent] {
        &[
            Continent::Africa,
            Continent::Americas,
            Continent::Asia,
            Continent::Europe,
            Continent::Fsu,
            Continent::Oceania,
        ]
    }

    /// Label as written in the dataset
    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Americas => "Americas",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::Fsu => "FSU",
            Continent::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown continent: {}", s))
    }
}

/// A numeric indicator that can be mapped onto a chart axis or marker size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    #[serde(rename = "pop")]
    Population,
    #[serde(rename = "lifeExp")]
    LifeExpectancy,
    #[serde(rename = "gdpPercap")]
    GdpPerCapita,
}

impl Measure {
    pub fn all() -> &'static [Measure] {
        &[
            Measure::Population,
            Measure::LifeExpectancy,
            Measure::GdpPerCapita,
        ]
    }

    /// Column name in the dataset, also used as the control option value
    pub fn column(&self) -> &'static str {
        match self {
            Measure::Population => "pop",
            Measure::LifeExpectancy => "lifeExp",
            Measure::GdpPerCapita => "gdpPercap",
        }
    }

    /// Human-readable axis label
    pub fn label(&self) -> &'static str {
        match self {
            Measure::Population => "Population",
            Measure::LifeExpectancy => "Life expectancy",
            Measure::GdpPerCapita => "GDP per capita",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pop" | "population" => Ok(Measure::Population),
            "lifeExp" | "life_expectancy" => Ok(Measure::LifeExpectancy),
            "gdpPercap" | "gdp_per_capita" => Ok(Measure::GdpPerCapita),
            _ => Err(format!(
                "unknown measure: {}. Use pop, lifeExp, or gdpPercap",
                s
            )),
        }
    }
}

/// Inclusive year filter
///
/// Bounds are real numbers because the time axis reports fractional years
/// while zooming. Always satisfies `from <= to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: f64,
    pub to: f64,
}

impl YearRange {
    /// Create a range, swapping the bounds if they arrive reversed
    pub fn new(from: f64, to: f64) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Build a range only when both bounds are known and finite.
    ///
    /// A single bound means "no filter", not a half-open range.
    pub fn from_bounds(from: Option<f64>, to: Option<f64>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) if from.is_finite() && to.is_finite() => {
                Some(Self::new(from, to))
            }
            _ => None,
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        let year = year as f64;
        self.from <= year && year <= self.to
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_parse() {
        assert_eq!("Asia".parse::<Continent>().unwrap(), Continent::Asia);
        assert_eq!("FSU".parse::<Continent>().unwrap(), Continent::Fsu);
        assert_eq!(" europe ".parse::<Continent>().unwrap(), Continent::Europe);
        assert!("Atlantis".parse::<Continent>().is_err());
    }

    #[test]
    fn test_measure_serde_uses_column_names() {
        let json = serde_json::to_string(&Measure::GdpPerCapita).unwrap();
        assert_eq!(json, "\"gdpPercap\"");

        let measure: Measure = serde_json::from_str("\"lifeExp\"").unwrap();
        assert_eq!(measure, Measure::LifeExpectancy);
        assert!(serde_json::from_str::<Measure>("\"height\"").is_err());
    }

    #[test]
    fn test_row_value() {
        let row = Row::new("Chad", Continent::Africa, 2007, 10_238_807, 50.651, 1704.06);
        assert_eq!(row.value(Measure::Population), 10_238_807.0);
        assert_eq!(row.value(Measure::LifeExpectancy), 50.651);
        assert_eq!(row.value(Measure::GdpPerCapita), 1704.06);
    }

    #[test]
    fn test_year_range_requires_both_bounds() {
        assert!(YearRange::from_bounds(None, None).is_none());
        assert!(YearRange::from_bounds(Some(1990.0), None).is_none());
        assert!(YearRange::from_bounds(None, Some(2000.0)).is_none());
        assert!(YearRange::from_bounds(Some(f64::NAN), Some(2000.0)).is_none());

        let range = YearRange::from_bounds(Some(1990.0), Some(2000.0)).unwrap();
        assert!(range.contains(1990));
        assert!(range.contains(2000));
        assert!(!range.contains(2001));
    }

    #[test]
    fn test_year_range_fractional_and_reversed() {
        let range = YearRange::new(2002.7, 1999.2);
        assert_eq!(range.from, 1999.2);
        assert_eq!(range.to, 2002.7);
        assert!(!range.contains(1999));
        assert!(range.contains(2000));
        assert!(range.contains(2002));
        assert!(!range.contains(2003));
    }
}
