//! A quick, built-in way to grab HTML from the live results site.
//!
//! This module can be disabled by building this crate without default features.

use crate::assembler::PageSource;
use crate::error::*;
use crate::scrapers::district_page::DistrictPageScraper;
use crate::scrapers::municipality_page::MunicipalityPageScraper;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// A quick, built-in way to grab HTML from the live results site.
pub struct Downloader {
    client: Client
}

impl Downloader {
    /// Create a HTTP client whose requests give up after `timeout`.
    #[inline]
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?
        })
    }

    /// Provide your own client for use by this struct.
    ///
    /// This means you can configure the client as you wish while still doing
    /// less work than re-implementing the functionality provided by this struct.
    #[inline]
    pub fn with_client(client: Client) -> Self {
        Self {
            client
        }
    }

    /// Obtain a scraper for a district results page.
    #[inline]
    pub fn district_page(&self, url: &Url) -> Result<DistrictPageScraper> {
        Ok(self.get_string(url)?.into())
    }

    /// Obtain a scraper for a municipality results page.
    #[inline]
    pub fn municipality_page(&self, url: &Url) -> Result<MunicipalityPageScraper> {
        Ok(self.get_string(url)?.into())
    }

    /// Helper to get the HTML of the given URL.
    fn get_string(&self, url: &Url) -> Result<String> {
        debug!("GET {}", url);

        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();

        if !status.is_success() {
            bail!(ErrorKind::NonSuccessStatus(url.to_string(), status.as_u16()));
        }

        Ok(resp.text()?)
    }
}

impl PageSource for Downloader {
    fn fetch(&self, url: &Url) -> Result<String> {
        self.get_string(url)
    }
}
