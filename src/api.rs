// API client module: contains a small blocking HTTP client that talks to
// the PokeAPI location-area endpoint. It is intentionally small and
// synchronous; each fetch blocks until the response arrives.

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Compiled-in first-page URL for the location listing.
pub const DEFAULT_LOCATIONS_URL: &str = "https://pokeapi.co/api/v2/location-area";

/// Simple API client that holds a reqwest blocking client and the URL of
/// the first page of the location listing. Later pages are fetched via the
/// absolute `next`/`previous` URLs the API hands back, so the client never
/// builds URLs itself.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    first_page_url: String,
}

/// One page of the location listing as returned by the API. `next` and
/// `previous` are absolute URLs, or null at either end of the list.
#[derive(Serialize, Deserialize, Debug)]
pub struct LocationPage {
    pub results: Vec<LocationEntry>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// A single named location. The API returns more fields (a `url` per
/// entry, counts, ...) but the shell only prints names, so everything else
/// is ignored on decode.
#[derive(Serialize, Deserialize, Debug)]
pub struct LocationEntry {
    pub name: String,
}

/// Paging position between `map`/`mapb` invocations: the next/previous
/// URLs from the most recently fetched page. Both start unset, meaning no
/// fetch has happened yet. Only the REPL mutates this, and only after a
/// successful fetch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl ApiClient {
    /// Create an ApiClient configured from the environment variable
    /// `POKEAPI_LOCATIONS_URL` or fallback to the public PokeAPI endpoint.
    /// The override exists so tests can point the client at a stub server.
    pub fn from_env() -> Result<Self> {
        let first_page_url = std::env::var("POKEAPI_LOCATIONS_URL")
            .unwrap_or_else(|_| DEFAULT_LOCATIONS_URL.into());
        Self::with_first_page_url(&first_page_url)
    }

    /// Create an ApiClient with an explicit first-page URL.
    pub fn with_first_page_url(url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            first_page_url: url.to_string(),
        })
    }

    /// The URL a forward fetch targets when the cursor has no `next` yet.
    pub fn first_page_url(&self) -> &str {
        &self.first_page_url
    }

    /// GET one page of the location listing from `url` and decode it.
    /// Returns an error with the server response body on a non-success
    /// status, or with context on a transport or decode failure. Never
    /// retries.
    pub fn fetch_locations(&self, url: &str) -> Result<LocationPage> {
        debug!("GET {url}");
        let res = self
            .client
            .get(url)
            .send()
            .context("Failed to send location request")?;
        if !res.status().is_success() {
            let status = res.status();
            let txt = res.text().unwrap_or_else(|_| "".into());
            anyhow::bail!("Location request failed: {} - {}", status, txt);
        }
        let page: LocationPage = res.json().context("Parsing location page json")?;
        debug!(
            "decoded {} locations (next: {:?}, previous: {:?})",
            page.results.len(),
            page.next,
            page.previous
        );
        Ok(page)
    }
}
