//! Shared test table
//!
//! Eighteen countries. Every country has 1997 and 2002; countries whose
//! index is not a multiple of three also have 2007; China and India also
//! have 2000 and 2001. Population grows with the year so the latest row of
//! each country is also its most populous.

use super::loader::parse_csv;
use super::table::Table;

pub(crate) const COUNTRIES: &[(&str, &str, u64)] = &[
    ("China", "Asia", 1_230_000_000),
    ("India", "Asia", 960_000_000),
    ("United States", "Americas", 270_000_000),
    ("Indonesia", "Asia", 200_000_000),
    ("Brazil", "Americas", 168_000_000),
    ("Pakistan", "Asia", 135_000_000),
    ("Russia", "FSU", 148_000_000),
    ("Bangladesh", "Asia", 123_000_000),
    ("Japan", "Asia", 125_000_000),
    ("Nigeria", "Africa", 106_000_000),
    ("Mexico", "Americas", 95_000_000),
    ("Germany", "Europe", 82_000_000),
    ("Vietnam", "Asia", 76_000_000),
    ("Philippines", "Asia", 75_000_000),
    ("Egypt", "Africa", 66_000_000),
    ("France", "Europe", 58_000_000),
    ("Australia", "Oceania", 18_000_000),
    ("New Zealand", "Oceania", 3_700_000),
];

pub(crate) fn years_for(index: usize, country: &str) -> Vec<i32> {
    let mut years = vec![1997];
    if country == "China" || country == "India" {
        years.extend([2000, 2001]);
    }
    years.push(2002);
    if index % 3 != 0 {
        years.push(2007);
    }
    years
}

pub(crate) fn population_at(base: u64, year: i32) -> u64 {
    base + (year - 1997) as u64 * 1_000_000
}

pub(crate) fn sample_csv() -> String {
    let mut csv = String::from("country,continent,year,lifeExp,pop,gdpPercap\n");
    for (index, (country, continent, base)) in COUNTRIES.iter().enumerate() {
        for year in years_for(index, country) {
            let life_exp = 50.0 + index as f64 + (year - 1997) as f64 * 0.25;
            let gdp = 1000.0 * (index + 1) as f64 + (year - 1997) as f64 * 10.0;
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                country,
                continent,
                year,
                life_exp,
                population_at(*base, year),
                gdp
            ));
        }
    }
    csv
}

pub(crate) fn sample_table() -> Table {
    parse_csv(&sample_csv()).expect("fixture CSV parses")
}
