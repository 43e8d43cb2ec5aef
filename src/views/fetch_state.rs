//! Per-view fetch bookkeeping
//!
//! Every fetch a view issues gets the next sequence number. Only the response
//! carrying the latest number is applied; older ones are dropped.

use crate::api::error::ApiError;

/// Result of handing a response to a [`FetchState`].
#[derive(Debug)]
pub enum Completion {
    /// The response was the latest one and its data is now current.
    Stored,
    /// The latest request failed. Prior data is untouched.
    Failed(ApiError),
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct FetchState<T> {
    data: Option<T>,
    loading: bool,
    latest: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            latest: 0,
        }
    }
}

impl<T> FetchState<T> {
    /// Marks a new request as in flight and returns its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.loading = true;
        self.latest
    }

    /// Applies the response for request `seq`.
    pub fn complete(&mut self, seq: u64, result: Result<T, ApiError>) -> Completion {
        if seq != self.latest {
            return Completion::Stale;
        }
        // Cleared on every outcome of the latest request.
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                Completion::Stored
            }
            Err(e) => Completion::Failed(e),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of requests issued so far.
    #[cfg(test)]
    pub fn issued(&self) -> u64 {
        self.latest
    }
}
