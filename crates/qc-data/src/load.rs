//! Loading both collections into a quote bank.

use qc_core::{Category, QuoteBank};
use tracing::info;

use crate::error::{DataError, DataResult};
use crate::source::DataSource;

/// Locations of both payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    /// Where rap quotes come from.
    pub rap: DataSource,
    /// Where author quotes come from.
    pub author: DataSource,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            rap: DataSource::bundled(Category::Rap),
            author: DataSource::bundled(Category::Author),
        }
    }
}

impl Sources {
    /// Override the rap location.
    pub fn with_rap(mut self, source: DataSource) -> Self {
        self.rap = source;
        self
    }

    /// Override the author location.
    pub fn with_author(mut self, source: DataSource) -> Self {
        self.author = source;
        self
    }

    /// Fetch both payloads concurrently and parse them.
    pub async fn load(&self) -> DataResult<QuoteBank> {
        load_bank(&self.rap, &self.author).await
    }
}

/// Fetch both payloads concurrently and parse each into its category.
///
/// Completes only when both fetches succeed; the first failure is returned
/// and no partial bank is produced. There is no timeout.
pub async fn load_bank(rap: &DataSource, author: &DataSource) -> DataResult<QuoteBank> {
    let client = reqwest::Client::builder()
        .build()
        .map_err(DataError::Client)?;

    let (rap_text, author_text) =
        tokio::try_join!(rap.fetch(&client), author.fetch(&client))?;
    let bank = QuoteBank::from_payloads(&rap_text, &author_text);

    info!(
        rap = bank.quotes(Category::Rap).len(),
        author = bank.quotes(Category::Author).len(),
        "quote bank loaded"
    );
    Ok(bank)
}
