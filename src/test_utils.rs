use crate::assembler::PageSource;
use crate::data_structs::{MunicipalityRef, PartyTally, VoteSummary};
use crate::error::*;
use std::collections::HashMap;
use url::Url;

pub const DISTRICT_URL: &str =
    "https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=2&xnumnuts=2101";
const MUNICIPALITY_URL_PREFIX: &str = "https://www.volby.cz/pls/ps2017nss/ps311?xobec=";

/// Pages served from memory; unknown URLs answer like a 404.
#[derive(Debug, Default)]
pub struct StaticPages {
    pages: HashMap<String, String>
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: &str, html: &str) {
        self.pages.insert(url.into(), html.into());
    }
}

impl PageSource for StaticPages {
    fn fetch(&self, url: &Url) -> Result<String> {
        match self.pages.get(url.as_str()) {
            Some(html) => Ok(html.clone()),
            None => bail!(ErrorKind::NonSuccessStatus(url.to_string(), 404))
        }
    }
}

pub fn municipality(code: &str, name: &str) -> MunicipalityRef {
    MunicipalityRef {
        code: code.into(),
        name: name.into(),
        url: Url::parse(&format!("{}{}", MUNICIPALITY_URL_PREFIX, code)).unwrap()
    }
}

/// A district page in the site's layout: code link, name cell, precinct cell.
pub fn district_page_html(municipalities: &[(&str, &str, &str)]) -> String {
    let mut html = String::from(
        "<html><body><table class=\"table\">\
         <tr><th id=\"t1sa1\" colspan=\"2\">Obec</th><th id=\"t1sa2\" rowspan=\"2\">Výběr okrsku</th></tr>\
         <tr><th id=\"t1sb1\">číslo</th><th id=\"t1sb2\">název</th></tr>"
    );

    for (code, name, href) in municipalities {
        html.push_str(&format!(
            "<tr><td class=\"cislo\" headers=\"t1sa1 t1sb1\"><a href=\"{href}\">{code}</a></td>\
             <td class=\"overflow_name\" headers=\"t1sa1 t1sb2\">{name}</td>\
             <td class=\"center\" headers=\"t1sa2\"><a href=\"{href}\">X</a></td></tr>",
            href = href,
            code = code,
            name = name
        ));
    }

    html.push_str("</table></body></html>");
    html
}

/// A municipality page in the site's layout, counts grouped with NBSP.
pub fn municipality_page_html(summary: VoteSummary, tally: &PartyTally) -> String {
    let mut html = format!(
        "<html><body><table id=\"ps311_t1\">\
         <tr><td headers=\"sa1 sb1\">1</td><td headers=\"sa1 sb2\">1</td><td headers=\"sa1 sb3\">100,00</td>\
         <td headers=\"sa2\">{}</td><td headers=\"sa3\">{}</td><td headers=\"sa4\">90,00</td>\
         <td headers=\"sa5\">{}</td><td headers=\"sa6\">{}</td><td headers=\"sa7\">97,78</td></tr>\
         </table><table>\
         <tr><th id=\"t1sb1\">číslo</th><th id=\"t1sb2\">název</th><th id=\"t1sb3\">celkem</th></tr>",
        grouped(summary.registered),
        grouped(summary.envelopes),
        grouped(summary.envelopes),
        grouped(summary.valid)
    );

    for (rank, (party, votes)) in tally.iter().enumerate() {
        html.push_str(&format!(
            "<tr><td headers=\"t1sa1 t1sb1\">{}</td><td headers=\"t1sa1 t1sb2\">{}</td>\
             <td headers=\"t1sa2 t1sb3\">{}</td><td headers=\"t1sa2 t1sb4\">0,00</td></tr>",
            rank + 1,
            party,
            grouped(votes)
        ));
    }

    html.push_str("</table></body></html>");
    html
}

pub fn alpha_beta_municipalities() -> Vec<MunicipalityRef> {
    vec![municipality("001", "Alpha"), municipality("002", "Beta")]
}

/// The district page of `DISTRICT_URL` with an Alpha and a Beta municipality
/// whose party sets only overlap on PartyA.
pub fn alpha_beta_pages() -> StaticPages {
    let mut pages = StaticPages::new();
    pages.insert(
        DISTRICT_URL,
        &district_page_html(&[
            ("001", "Alpha", "ps311?xobec=001"),
            ("002", "Beta", "ps311?xobec=002")
        ])
    );

    let mut alpha = PartyTally::new();
    alpha.insert("PartyA", 50);
    alpha.insert("PartyB", 38);
    pages.insert(
        &format!("{}001", MUNICIPALITY_URL_PREFIX),
        &municipality_page_html(VoteSummary { registered: 100, envelopes: 90, valid: 88 }, &alpha)
    );

    let mut beta = PartyTally::new();
    beta.insert("PartyA", 70);
    beta.insert("PartyC", 79);
    pages.insert(
        &format!("{}002", MUNICIPALITY_URL_PREFIX),
        &municipality_page_html(VoteSummary { registered: 200, envelopes: 150, valid: 149 }, &beta)
    );

    pages
}

/// Formats a count with NBSP between digit groups, as the site does.
fn grouped(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::new();

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str("&nbsp;");
        }
        out.push(digit);
    }

    out
}
