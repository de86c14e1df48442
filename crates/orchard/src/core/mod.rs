//! Pure transformations with no I/O.

mod sample;
mod text;
mod url;

pub use sample::{sample, sample_item, sample_item_with};
pub use text::{capitalize, capitalize_str};
pub use url::{API_HOST, API_PORT, API_PREFIX, fruit_url};
