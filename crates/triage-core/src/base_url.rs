//! Validated service origin.

use std::fmt;
use std::str::FromStr;

use url::Url;
use crate::errors::{PredictError, PredictResult};

/// An `http`/`https` URL with a host and no query or fragment, stored
/// without a trailing slash so endpoint paths can be appended directly.
///
/// A path prefix is allowed (`https://host/ml` → `https://host/ml/api/v1/...`)
/// for services mounted behind a reverse proxy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BaseUrl(String);

impl BaseUrl {
    pub fn parse(input: &str) -> PredictResult<Self> {
        let invalid = |reason: &str| PredictError::InvalidBaseUrl {
            url: input.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(input.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("must not carry a query or fragment"));
        }

        Ok(Self(url.as_str().trim_end_matches('/').to_string()))
    }

    /// Absolute URL for an endpoint path such as `/api/v1/predict`.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseUrl {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let base = BaseUrl::parse("http://localhost:8000/").unwrap();
        assert_eq!(base.as_str(), "http://localhost:8000");
        assert_eq!(
            base.join("/api/v1/model_meta"),
            "http://localhost:8000/api/v1/model_meta"
        );
    }

    #[test]
    fn keeps_path_prefix() {
        let base = BaseUrl::parse("https://gateway.example.org/ml/").unwrap();
        assert_eq!(
            base.join("/api/v1/predict"),
            "https://gateway.example.org/ml/api/v1/predict"
        );
    }

    #[test]
    fn rejects_other_schemes() {
        let err = BaseUrl::parse("ftp://localhost:8000").unwrap_err();
        assert!(matches!(err, PredictError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(BaseUrl::parse("localhost:8000").is_err());
        assert!(BaseUrl::parse("").is_err());
        assert!(BaseUrl::parse("http://").is_err());
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let base = BaseUrl::parse("HTTPS://triage.example.org").unwrap();
        assert_eq!(base.as_str(), "https://triage.example.org");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = BaseUrl::parse("http://localhost:notaport").unwrap_err();
        assert!(matches!(err, PredictError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_query_and_fragment() {
        assert!(BaseUrl::parse("http://localhost:8000/?x=1").is_err());
        assert!(BaseUrl::parse("http://localhost:8000/#top").is_err());
    }
}
