//! Where a quote payload comes from.

use std::fmt;
use std::path::PathBuf;

use qc_core::Category;
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Rap quotes shipped with the binary.
pub const BUNDLED_RAP: &str = include_str!("../data/rap-quotes.csv");

/// Author quotes shipped with the binary.
pub const BUNDLED_AUTHOR: &str = include_str!("../data/author-quotes.csv");

/// Location of one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Text compiled into the binary.
    Bundled(&'static str),
    /// A local file.
    File(PathBuf),
    /// An `http://` or `https://` URL fetched with a GET.
    Url(String),
}

impl DataSource {
    /// The bundled payload for a category.
    pub fn bundled(category: Category) -> Self {
        match category {
            Category::Rap => Self::Bundled(BUNDLED_RAP),
            Category::Author => Self::Bundled(BUNDLED_AUTHOR),
        }
    }

    /// Interpret a command-line location: URLs by scheme, anything else as a
    /// file path.
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Retrieve the payload text.
    pub async fn fetch(&self, client: &reqwest::Client) -> DataResult<String> {
        let text = match self {
            Self::Bundled(text) => (*text).to_string(),
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| DataError::Read {
                        path: path.clone(),
                        source,
                    })?
            }
            Self::Url(url) => fetch_url(client, url).await.map_err(|source| DataError::Http {
                url: url.clone(),
                source,
            })?,
        };
        debug!(source = %self, bytes = text.len(), "fetched payload");
        Ok(text)
    }
}

async fn fetch_url(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    client.get(url).send().await?.error_for_status()?.text().await
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled(_) => write!(f, "bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
