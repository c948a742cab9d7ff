use url::Url;

/// Names of the columns that precede the party columns in the output table.
pub const FIXED_COLUMNS: [&str; 5] = [
    "cislo",
    "nazev",
    "volici_v_seznamu",
    "vydane_obalky",
    "platne_hlasy"
];

/// A municipality linked from a district page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct MunicipalityRef {
    /// Numeric municipality code, unique within the district.
    pub code: String,
    pub name: String,
    /// Absolute URL of the municipality results page.
    pub url: Url
}

/// The three summary figures of a municipality.
///
/// `envelopes <= registered` usually holds but is not checked; the published
/// data has quirks.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct VoteSummary {
    /// Voters on the electoral roll.
    pub registered: u64,
    /// Envelopes issued.
    pub envelopes: u64,
    /// Valid votes.
    pub valid: u64
}

/// Votes per party for one municipality, in page order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct PartyTally {
    entries: Vec<(String, u64)>
}

impl PartyTally {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the votes of a party.
    ///
    /// A party seen again keeps its original position and takes the new count.
    pub fn insert<S: Into<String>>(&mut self, party: S, votes: u64) {
        let party = party.into();

        match self.entries.iter_mut().find(|(name, _)| *name == party) {
            Some(entry) => entry.1 = votes,
            None => self.entries.push((party, votes))
        }
    }

    #[inline]
    pub fn get(&self, party: &str) -> Option<u64> {
        self.entries.iter().find(|(name, _)| name == party).map(|(_, votes)| *votes)
    }

    #[inline]
    pub fn parties(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, votes)| (name.as_str(), *votes))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/**
The party columns of the output table.

Fixed from the first municipality processed and never reordered or extended
afterwards. Parties missing from a later municipality count as 0; parties that
only show up later are dropped. This loses data when the first municipality
is not representative of the district.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct PartyHeader {
    parties: Vec<String>
}

impl PartyHeader {
    /// Takes the party order of the given tally as the column order.
    pub fn from_tally(tally: &PartyTally) -> Self {
        Self {
            parties: tally.parties().map(String::from).collect()
        }
    }

    #[inline]
    pub fn parties(&self) -> &[String] {
        &self.parties
    }

    /// Lays the tally out along the header, filling in 0 for absent parties.
    pub fn votes(&self, tally: &PartyTally) -> Vec<u64> {
        self.parties.iter().map(|party| tally.get(party).unwrap_or(0)).collect()
    }
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct Row {
    pub code: String,
    pub name: String,
    pub summary: VoteSummary,
    /// One count per `PartyHeader` entry, in header order.
    pub votes: Vec<u64>
}

impl Row {
    /// The row as text fields in column order.
    pub fn record(&self) -> Vec<String> {
        let mut record = vec![
            self.code.clone(),
            self.name.clone(),
            self.summary.registered.to_string(),
            self.summary.envelopes.to_string(),
            self.summary.valid.to_string()
        ];
        record.extend(self.votes.iter().map(u64::to_string));

        record
    }
}

/// Header and rows ready to be written out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "derive-serde", derive(Serialize, Deserialize))]
pub struct Table {
    pub header: Option<PartyHeader>,
    pub rows: Vec<Row>
}

impl Table {
    /// Column names: the fixed columns, then the parties in discovery order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = FIXED_COLUMNS.to_vec();

        if let Some(header) = &self.header {
            columns.extend(header.parties().iter().map(String::as_str));
        }

        columns
    }
}
