//! Trace colors
//!
//! Uses plotly's default qualitative sequence so charts match the look of
//! the browser library's own defaults.

use crate::dataset::Continent;

pub const QUALITATIVE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Color for the n-th series, cycling through the palette
pub fn series_color(index: usize) -> &'static str {
    QUALITATIVE[index % QUALITATIVE.len()]
}

/// Stable color per continent, shared by the bubble and pie charts
pub fn continent_color(continent: Continent) -> &'static str {
    let index = Continent::all()
        .iter()
        .position(|c| *c == continent)
        .unwrap_or_default();
    series_color(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_color_cycles() {
        assert_eq!(series_color(0), series_color(QUALITATIVE.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn test_continent_colors_distinct() {
        let colors: std::collections::HashSet<_> =
            Continent::all().iter().map(|c| continent_color(*c)).collect();
        assert_eq!(colors.len(), Continent::all().len());
    }
}
