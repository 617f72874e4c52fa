//! Section content: what each section renders and where it comes from.

pub mod fixtures;
mod loader;
pub mod models;

use api::Endpoint;
use serde::de::DeserializeOwned;

pub use loader::{
    resolve, use_section_content, use_section_content_with, Loaded, LoadingGuard, Origin,
    RequestHandle, SectionState,
};

/// A view-model backed by one content endpoint.
///
/// `fallback` and `from_raw` must produce the same type so a section never
/// knows which path its items came from.
pub trait SectionContent: Clone + PartialEq + 'static {
    type Raw: DeserializeOwned + 'static;
    const ENDPOINT: Endpoint;

    fn fallback() -> Vec<Self>;

    /// Maps the record at `index`; `None` drops it from the list.
    fn from_raw(index: usize, raw: Self::Raw) -> Option<Self>;
}
