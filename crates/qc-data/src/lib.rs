//! Startup retrieval of the two quote payloads.
//!
//! Each payload is bundled text, a local file or an HTTP URL. Both are
//! fetched concurrently; the bank is only produced once both arrive.

pub mod error;
pub mod load;
pub mod source;

pub use error::{DataError, DataResult};
pub use load::{Sources, load_bank};
pub use source::DataSource;
