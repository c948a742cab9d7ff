//! Turns the municipality pages of a district into output rows.

use crate::data_structs::{MunicipalityRef, PartyHeader, PartyTally, Row, Table, VoteSummary};
use crate::error::*;
use crate::scrapers::municipality_page::MunicipalityPageScraper;
use url::Url;

/// Anything that can hand over the HTML behind a URL.
pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Collects rows, fixing the party columns from the first municipality.
#[derive(Debug, Default)]
pub struct RowAssembler {
    header: Option<PartyHeader>,
    rows: Vec<Row>
}

impl RowAssembler {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The party columns, once the first municipality has been added.
    #[inline]
    pub fn header(&self) -> Option<&PartyHeader> {
        self.header.as_ref()
    }

    /// Adds the row of one municipality.
    ///
    /// The first call fixes the party columns from `tally`. Later calls lay
    /// their tally out along those columns.
    pub fn push(&mut self, municipality: &MunicipalityRef, summary: VoteSummary, tally: &PartyTally) -> &Row {
        let header = self.header.get_or_insert_with(|| PartyHeader::from_tally(tally));

        self.rows.push(Row {
            code: municipality.code.clone(),
            name: municipality.name.clone(),
            summary,
            votes: header.votes(tally)
        });

        &self.rows[self.rows.len() - 1]
    }

    #[inline]
    pub fn into_table(self) -> Table {
        Table {
            header: self.header,
            rows: self.rows
        }
    }
}

/// Fetches and parses every municipality in order and assembles the table.
///
/// The first failure ends the whole run; nothing is skipped.
pub fn assemble<S: PageSource>(source: &S, municipalities: &[MunicipalityRef]) -> Result<Table> {
    let mut assembler = RowAssembler::new();
    let total = municipalities.len();

    for (i, municipality) in municipalities.iter().enumerate() {
        info!("({}/{}) Processing municipality {} ({})", i + 1, total, municipality.name, municipality.code);

        let page = MunicipalityPageScraper::from(source.fetch(&municipality.url)?);
        let summary = page.vote_summary()?;
        let tally = page.party_tallies()?;

        assembler.push(municipality, summary, &tally);
    }

    Ok(assembler.into_table())
}
