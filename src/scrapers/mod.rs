//! Various modules for getting data from the election results HTML.

pub mod district_page;
pub mod municipality_page;

use crate::error::*;
use scraper::{ElementRef, Selector};
use std::collections::HashMap;

/// Compiles a TOML table of `name = "css selector"` pairs.
fn load_sels(toml_str: &str) -> Result<HashMap<String, Selector>> {
    let raw: HashMap<String, String> = toml::from_str(toml_str)?;
    let mut selectors = HashMap::with_capacity(raw.len());

    for (name, sel) in raw {
        let compiled = Selector::parse(&sel)
            .map_err(|_| Error::from(ErrorKind::InvalidSelector(sel.clone())))?;
        selectors.insert(name, compiled);
    }

    Ok(selectors)
}

/// Text of an element with every text node trimmed and the pieces joined.
fn cell_text(elem: ElementRef) -> String {
    elem.text().map(str::trim).collect()
}

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// Removes whitespace (NBSP included) and any of the extra separator chars.
fn strip_separators(text: &str, extra: &[char]) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && !extra.contains(c))
        .collect()
}

fn parse_count(text: &str) -> Result<u64> {
    text.parse::<u64>()
        .map_err(|_| ErrorKind::InvalidNumber(text.into()).into())
}
