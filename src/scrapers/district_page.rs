//! Handles extraction of the municipality list from a district results page.

use super::{cell_text, is_numeric, load_sels};
use crate::data_structs::MunicipalityRef;
use crate::error::*;
use scraper::{ElementRef, Html};
use url::Url;

const DISTRICT_PAGE_SELECTORS_STR: &str = include_str!("../../selectors/district_page.toml");

/// Handles extraction of the municipality list from a district results page.
///
/// You can either provide your own HTML string (see the `From<String>` impl)
/// or use the `http_client::Downloader`.
pub struct DistrictPageScraper {
    doc: Html
}

impl From<String> for DistrictPageScraper {
    fn from(html: String) -> Self {
        DistrictPageScraper {
            doc: Html::parse_document(&html)
        }
    }
}

impl DistrictPageScraper {
    /**
    Lists the municipalities linked from the page, in document order.

    A link counts when its text is a numeric municipality code and its `href`
    contains `link_marker`. The name is taken from the first table cell after
    the link; links without one are skipped. Relative links are resolved
    against `base`.

    An empty list is not an error here, but the page is useless to the caller.
    */
    pub fn municipalities(&self, base: &Url, link_marker: &str) -> Result<Vec<MunicipalityRef>> {
        let selectors = load_sels(DISTRICT_PAGE_SELECTORS_STR)?;
        let elems: Vec<ElementRef> = self.doc.select(&selectors["links_and_cells"]).collect();
        let mut municipalities = vec![];

        for (i, link) in elems.iter().enumerate() {
            if link.value().name() != "a" {
                continue;
            }

            let code = cell_text(*link);
            let href = link.value().attr("href").unwrap_or("");

            if !is_numeric(&code) || !href.contains(link_marker) {
                continue;
            }

            let name_cell = match elems[i + 1..].iter().find(|e| e.value().name() == "td") {
                Some(cell) => cell,
                None => {
                    debug!("Skipping municipality {}: no name cell follows the link", code);
                    continue;
                }
            };

            municipalities.push(MunicipalityRef {
                name: cell_text(*name_cell),
                url: base.join(href)?,
                code
            });
        }

        Ok(municipalities)
    }
}
