//! Collects the results of a Czech parliamentary election district into one
//! CSV table, one row per municipality.
//!
//! The district page (`ps32`) links every municipality page (`ps311`); each of
//! those holds three summary counts and the votes of every party.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate if_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod error;
pub mod data_structs;
pub mod config;
pub mod scrapers;
pub mod assembler;
pub mod table;
#[cfg(feature = "http-client")]
pub mod http_client;
#[cfg(test)]
mod test_utils;

use crate::assembler::{assemble, PageSource};
use crate::config::Config;
use crate::data_structs::Table;
use crate::error::*;
use crate::scrapers::district_page::DistrictPageScraper;
use std::path::PathBuf;
use url::Url;

/// Scrapes the district page at `url` and every municipality it links.
///
/// Fails with `NoMunicipalities` when the page links none.
pub fn scrape_district<S: PageSource>(source: &S, config: &Config, url: &Url) -> Result<Table> {
    info!("Fetching district page {}", url);

    let district = DistrictPageScraper::from(source.fetch(url)?);
    let base = url.join(".")?;
    let municipalities = district.municipalities(&base, &config.municipality_marker)?;

    if municipalities.is_empty() {
        bail!(ErrorKind::NoMunicipalities(url.to_string()));
    }

    info!("Found {} municipalities", municipalities.len());

    assemble(source, &municipalities)
}

/// Validates the user's input, scrapes the district and writes the table.
///
/// Returns the path actually written. Nothing is written unless every
/// municipality was processed.
pub fn run<S: PageSource>(source: &S, config: &Config, raw_url: &str, raw_output: &str) -> Result<PathBuf> {
    let url = config.source_url(raw_url)?;
    let output = config.output_path(raw_output)?;

    let results = scrape_district(source, config, &url)?;
    table::write_csv(&output, &results)?;

    Ok(output)
}
