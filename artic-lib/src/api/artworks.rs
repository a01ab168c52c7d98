//! `GET /artworks`

use async_trait::async_trait;
use log::debug;
use log::trace;
use reqwest::header::ACCEPT;
use url::Url;

use crate::ArticClient;
use crate::api::Page;
use crate::api::PageSource;
use crate::api::page::ArtworksResponse;
use crate::error::ApiError;
use crate::error::Error;

impl ArticClient {
    /// Builds the URL for one page of the artworks collection.
    pub fn artworks_url(&self, page: u32, limit: u32) -> Result<Url, Error> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.inner.base_url.to_string()))?
            .pop_if_empty()
            .push("artworks");
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    /// Fetches one page of artworks.
    ///
    /// Non-success status codes, transport failures and malformed bodies all
    /// come back as [`Error::Api`].
    pub async fn fetch_artworks(&self, page: u32, limit: u32) -> Result<Page, Error> {
        let url = self.artworks_url(page, limit)?;
        debug!("GET {}", url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let body = response.text().await.map_err(ApiError::from)?;
        trace!("artworks page {} body: {} bytes", page, body.len());

        let parsed: ArtworksResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => return Err(ApiError::parse_with_body(e.to_string(), body).into()),
        };

        Ok(Page::from(parsed))
    }
}

#[async_trait]
impl PageSource for ArticClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, Error> {
        self.fetch_artworks(page, limit).await
    }
}
