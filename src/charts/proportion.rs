//! Continent Population Pie
//!
//! Donut chart of population per continent.
//!
//! By default every row of the table is summed and the year range is
//! ignored, so the chart stays the same while the time series is zoomed.
//! `PieScope::LatestSnapshot` switches to summing each country's latest row
//! inside the range instead.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::figure::{Figure, Layout, PieMarker, PieTrace, Trace};
use super::palette::continent_color;
use crate::dataset::{Continent, Table, YearRange};

pub const PIE_HOLE: f64 = 0.3;

/// Which rows the pie aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieScope {
    /// Every row of the table, year range ignored
    #[default]
    AllRows,
    /// Latest row per country inside the year range
    LatestSnapshot,
}

impl FromStr for PieScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all_rows" => Ok(PieScope::AllRows),
            "latest_snapshot" => Ok(PieScope::LatestSnapshot),
            _ => Err(format!(
                "invalid pie scope: {}. Use all_rows or latest_snapshot",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinentShare {
    pub continent: Continent,
    pub population: u64,
}

/// One slice per continent in scope, in continent order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProportionView {
    pub slices: Vec<ContinentShare>,
}

impl ProportionView {
    pub fn total(&self) -> u64 {
        self.slices
            .iter()
            .fold(0u64, |total, s| total.saturating_add(s.population))
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

pub fn proportion_view(table: &Table, range: Option<YearRange>, scope: PieScope) -> ProportionView {
    let rows = match scope {
        PieScope::AllRows => {
            if let Some(range) = range {
                tracing::trace!(%range, "Pie scope is all_rows, year range not applied");
            }
            table.in_range(None)
        }
        PieScope::LatestSnapshot => table.latest_snapshot(range),
    };

    // Saturates instead of overflowing on absurd populations
    let mut totals: BTreeMap<Continent, u64> = BTreeMap::new();
    for row in rows {
        let total = totals.entry(row.continent).or_default();
        *total = total.saturating_add(row.population);
    }

    let slices = totals
        .into_iter()
        .map(|(continent, population)| ContinentShare {
            continent,
            population,
        })
        .collect();

    ProportionView { slices }
}

pub fn proportion_figure(view: &ProportionView) -> Figure {
    let pie = PieTrace {
        labels: view
            .slices
            .iter()
            .map(|s| s.continent.as_str().to_string())
            .collect(),
        values: view.slices.iter().map(|s| s.population as f64).collect(),
        hole: PIE_HOLE,
        hovertemplate: Some(
            "<b>%{label}</b><br>pop=%{value}<br>%{percent}<extra></extra>".to_string(),
        ),
        marker: Some(PieMarker {
            colors: view
                .slices
                .iter()
                .map(|s| continent_color(s.continent).to_string())
                .collect(),
        }),
    };

    Figure::new(Layout::titled("Population by continent")).trace(Trace::Pie(pie))
}

pub fn build_proportion_chart(
    table: &Table,
    range: Option<YearRange>,
    scope: PieScope,
) -> Figure {
    proportion_figure(&proportion_view(table, range, scope))
}
