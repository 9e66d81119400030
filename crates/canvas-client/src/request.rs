//! Canvas API request descriptors.
//!
//! An [`ApiRequest`] is a GET path relative to `/api/v1`, held as raw path
//! segments plus query pairs. Segments are percent-encoded only when the
//! request is resolved against a base URL, so a page slug such as
//! `week 1/notes` stays a single segment.

use std::fmt;

use url::Url;

use crate::error::{ClientError, ClientResult};

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// A GET request against the Canvas REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Start a request from its leading path segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            segments: segments.into_iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
        }
    }

    /// Append one path segment.
    #[must_use]
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Append a query pair. Repeated keys are kept in order.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Resolve to an absolute URL under `{base}/api/v1`.
    pub fn resolve(&self, base: &Url) -> ClientResult<Url> {
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(base.to_string()))?;
            path.pop_if_empty();
            path.extend(API_PREFIX);
            path.extend(self.segments.iter());
        }

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}
