//! Handles extraction of vote counts from a municipality results page.

use super::{cell_text, is_numeric, load_sels, parse_count, strip_separators};
use crate::data_structs::{PartyTally, VoteSummary};
use crate::error::*;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

const MUNICIPALITY_PAGE_SELECTORS_STR: &str = include_str!("../../selectors/municipality_page.toml");

/// Thousands separator used in the summary table, next to NBSP.
const SUMMARY_SEPARATORS: &[char] = &[','];

/// Handles extraction of vote counts from a municipality results page.
///
/// You can either provide your own HTML string (see the `From<String>` impl)
/// or use the `http_client::Downloader`.
pub struct MunicipalityPageScraper {
    doc: Html
}

impl From<String> for MunicipalityPageScraper {
    fn from(html: String) -> Self {
        MunicipalityPageScraper {
            doc: Html::parse_document(&html)
        }
    }
}

impl MunicipalityPageScraper {
    /// Reads the registered voters, issued envelopes and valid votes.
    ///
    /// Either all three are found and parse, or the call fails.
    pub fn vote_summary(&self) -> Result<VoteSummary> {
        let selectors = load_sels(MUNICIPALITY_PAGE_SELECTORS_STR)?;

        Ok(VoteSummary {
            registered: self.summary_value(&selectors, "registered")?,
            envelopes: self.summary_value(&selectors, "envelopes")?,
            valid: self.summary_value(&selectors, "valid")?
        })
    }

    /**
    Reads the votes of every party listed on the page.

    A party row has at least three cells: a numeric rank (not kept), the party
    name, and a numeric vote count. Header, spacer and totals rows don't match
    that shape and are passed over.

    Finding no party row at all means the page isn't laid out the way we
    expect, so that is an error rather than an empty tally.
    */
    pub fn party_tallies(&self) -> Result<PartyTally> {
        let selectors = load_sels(MUNICIPALITY_PAGE_SELECTORS_STR)?;
        let mut tally = PartyTally::new();

        for row in self.doc.select(&selectors["row"]) {
            let cells: Vec<ElementRef> = row.select(&selectors["cell"]).collect();

            if_chain! {
                if cells.len() >= 3;
                if is_numeric(&cell_text(cells[0]));
                let votes = strip_separators(&cell_text(cells[2]), &[]);
                if is_numeric(&votes);

            then {
                tally.insert(cell_text(cells[1]), parse_count(&votes)?);
            } else {
                trace!("Skipping row with {} cells, not a party result", cells.len());
            }}
        }

        if tally.is_empty() {
            bail!(ErrorKind::NoPartyTallies);
        }

        Ok(tally)
    }

    fn summary_value(&self, selectors: &HashMap<String, Selector>, field: &str) -> Result<u64> {
        let cell = match self.doc.select(&selectors[field]).next() {
            Some(cell) => cell,
            None => bail!(ErrorKind::ValueMissing(field.into()))
        };

        parse_count(&strip_separators(&cell_text(cell), SUMMARY_SEPARATORS))
    }
}
