//! In-memory artwork collection for driving the list without a network.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use artic_lib::api::{Page, PageSource, Pagination};
use artic_lib::error::{ApiError, Error};
use artic_lib::model::Artwork;

/// A collection of `total` artworks with ids `1..=total`.
pub struct FakeCollection {
    total: u64,
    failing: HashSet<u32>,
    shift_after_first: u64,
    requests: Mutex<Vec<(u32, u32)>>,
}

impl FakeCollection {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            failing: HashSet::new(),
            shift_after_first: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Makes every request for `page` fail with a 503.
    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing.insert(page);
        self
    }

    /// After the first request, serve rows as if `n` records had been
    /// inserted at the front of the collection.
    pub fn shifting_by(mut self, n: u64) -> Self {
        self.shift_after_first = n;
        self
    }

    /// `(page, limit)` of every request received, in order.
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests().into_iter().map(|(page, _)| page).collect()
    }
}

#[async_trait]
impl PageSource for FakeCollection {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, Error> {
        let is_first = {
            let mut requests = self.requests.lock().unwrap();
            requests.push((page, limit));
            requests.len() == 1
        };

        if self.failing.contains(&page) {
            return Err(Error::Api(ApiError::http(503, "service unavailable")));
        }

        let mut start = u64::from(page.saturating_sub(1)) * u64::from(limit);
        if !is_first {
            start = start.saturating_sub(self.shift_after_first);
        }
        let end = (start + u64::from(limit)).min(self.total);
        let records = (start + 1..=end).map(Artwork::new).collect();

        Ok(Page::new(records, Pagination::with_total(self.total)))
    }
}

pub fn ids(records: &[Artwork]) -> Vec<u64> {
    records.iter().map(|r| r.id.get()).collect()
}
