use std::borrow::Cow;

pub type FetchResult<T, E = FetchError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("GET {url} returned HTTP {status}")]
    Http {
        url: url::Url,
        status: u16,
        body: String,
    },

    #[error("response from {url} is not valid JSON")]
    Decode {
        url: url::Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("profile field `{field}` is unusable: {reason}")]
    Schema {
        field: &'static str,
        reason: Cow<'static, str>,
    },

    #[error("an unexpected error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl FetchError {
    /// Convenient constructor for `FetchError::Schema`.
    pub fn schema(field: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Schema {
            field,
            reason: reason.into(),
        }
    }

    /// The HTTP status code, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
