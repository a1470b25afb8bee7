//! HTTP plumbing for the enhancement layer.
//!
//! The server speaks in status codes: form POSTs answer 204 when the
//! change was applied, 200 with a replacement fragment when validation
//! failed, and anything else on error. [`ExchangeOutcome`] and
//! [`FormBody`] capture that contract without touching the DOM; the
//! fetch helpers below them are wasm-only.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Method, Request};
#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;

/// Failure of a fetch helper, from dispatch through body decoding.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS, abort).
    #[error("request to {url} failed: {message}")]
    Network {
        /// Request target.
        url: String,
        /// Browser-reported failure detail.
        message: String,
    },
    /// The response arrived but its body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
    /// The body was read but did not decode as the expected payload.
    #[error("payload did not decode: {0}")]
    Decode(String),
}

/// How a form POST resolved, keyed on the response status alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExchangeOutcome {
    /// 204: the server applied the change and sent no body.
    Applied,
    /// 200: validation failed; the body is a replacement fragment to
    /// install verbatim.
    Rerender,
    /// Any other status; the body is not trusted.
    Failed(u16),
}

impl ExchangeOutcome {
    /// Classify a response status. Every status outside the two success
    /// codes lands in [`Self::Failed`], including redirects the browser
    /// did not follow.
    #[must_use]
    pub const fn classify(status: u16) -> Self {
        match status {
            204 => Self::Applied,
            200 => Self::Rerender,
            other => Self::Failed(other),
        }
    }
}

/// An ordered `application/x-www-form-urlencoded` body.
///
/// Field order is preserved so the pressed button's pair can be appended
/// last, the way a browser submits it. Duplicate names are allowed
/// (checkbox rows share a value, not a name, but selects may repeat).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    /// Empty body.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a field, keeping insertion order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// The collected fields in submission order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// True when no field has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode into a wire body. Names and values are encoded
    /// independently; `=` and `&` only ever appear as separators.
    #[must_use]
    pub fn encoded(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.pairs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&urlencoding::encode(name));
            out.push('=');
            out.push_str(&urlencoding::encode(value));
        }
        out
    }
}

/// POST a form body and return the status with the raw response text.
///
/// The `X-Requested-With` header is what makes the server answer 204
/// instead of redirecting.
#[cfg(target_arch = "wasm32")]
pub async fn post_form(url: &str, body: &FormBody) -> Result<(u16, String), FetchError> {
    let response = Request::post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("X-Requested-With", "XMLHttpRequest")
        .body(body.encoded())
        .send()
        .await
        .map_err(|err| FetchError::Network {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| FetchError::Body(err.to_string()))?;
    Ok((status, text))
}

/// GET a server-rendered HTML fragment.
#[cfg(target_arch = "wasm32")]
pub async fn get_fragment(url: &str) -> Result<String, FetchError> {
    let response = Request::get(url)
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(|err| FetchError::Network {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
    response
        .text()
        .await
        .map_err(|err| FetchError::Body(err.to_string()))
}

/// GET and decode a JSON payload.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Network {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
    response
        .json::<T>()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

/// HEAD a URL and return the bare status code.
#[cfg(target_arch = "wasm32")]
pub async fn head_status(url: &str) -> Result<u16, FetchError> {
    let response = Request::new(url)
        .method(Method::HEAD)
        .send()
        .await
        .map_err(|err| FetchError::Network {
            url: url.to_owned(),
            message: err.to_string(),
        })?;
    Ok(response.status())
}

#[cfg(test)]
mod tests {
    use super::{ExchangeOutcome, FormBody};

    #[test]
    fn classify_splits_exactly_three_ways() {
        assert_eq!(ExchangeOutcome::classify(204), ExchangeOutcome::Applied);
        assert_eq!(ExchangeOutcome::classify(200), ExchangeOutcome::Rerender);
        for status in [201, 202, 301, 400, 403, 500] {
            assert_eq!(
                ExchangeOutcome::classify(status),
                ExchangeOutcome::Failed(status)
            );
        }
    }

    #[test]
    fn encoded_preserves_field_order() {
        let mut body = FormBody::new();
        body.push("csrfmiddlewaretoken", "tok");
        body.push("description", "spam trap");
        body.push("pinned", "on");
        body.push("important", "");
        assert_eq!(
            body.encoded(),
            "csrfmiddlewaretoken=tok&description=spam%20trap&pinned=on&important="
        );
    }

    #[test]
    fn encoded_escapes_separator_characters() {
        let mut body = FormBody::new();
        body.push("q", "a&b=c");
        body.push("note", "50% off");
        assert_eq!(body.encoded(), "q=a%26b%3Dc&note=50%25%20off");
    }

    #[test]
    fn empty_body_encodes_to_nothing() {
        let body = FormBody::new();
        assert!(body.is_empty());
        assert_eq!(body.encoded(), "");
    }

    #[test]
    fn duplicate_names_survive() {
        let mut body = FormBody::new();
        body.push("tag", "a");
        body.push("tag", "b");
        assert_eq!(body.pairs().len(), 2);
        assert_eq!(body.encoded(), "tag=a&tag=b");
    }
}
