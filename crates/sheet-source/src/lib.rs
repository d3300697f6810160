//! Projectboard Sheet Source
//!
//! Loads project records from the spreadsheet-backed web endpoint. The
//! dashboard issues exactly one fetch per process start; there is no retry,
//! caching or pagination at this layer.
//!
//! - [`ProjectSource`] - seam used by the server so tests can supply records
//! - [`SheetProjectSource`] - HTTP implementation against [`DEFAULT_SOURCE_URL`]
//! - [`SourceError`] - fetch failures

pub mod errors;
pub mod sheet;
pub mod source;

pub use errors::SourceError;
pub use sheet::{SheetProjectSource, DEFAULT_SOURCE_URL};
pub use source::ProjectSource;
