//! Small helpers for strings, random sampling and fetching, with the network
//! call behind an injectable requester.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable values ([`Deferred`], [`FruitResponse`])
//! - [`core`] - Pure transformations
//! - [`effects`] - Time and network operations with trait abstraction
//!
//! # Example
//!
//! ```
//! use orchard::{Requester, capitalize, fetch_fruit, sample_item};
//! use serde_json::{Value, json};
//!
//! struct StandIn;
//!
//! impl Requester for StandIn {
//!     type Response = Value;
//!     type Error = String;
//!
//!     async fn get(&self, _url: &str) -> Result<Value, String> {
//!         Ok(json!({ "data": { "fruits": ["apple", "pear"] } }))
//!     }
//! }
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let resp = rt.block_on(fetch_fruit("fruit", &StandIn)).unwrap();
//! let fruit = capitalize(sample_item(&resp["data"]["fruits"]).unwrap()).unwrap();
//! assert!(fruit == "Apple" || fruit == "Pear");
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{API_HOST, API_PORT, API_PREFIX, capitalize, capitalize_str, fruit_url, sample, sample_item, sample_item_with};
pub use self::data::{Deferred, FruitResponse};
pub use self::effects::{HELLO_DELAY, Requester, fetch_fruit, fetch_hello};

#[cfg(feature = "reqwest")]
pub use self::effects::{ClientSetting, ClientSettingError, ReqwestClient, fetch_fruit_default};

pub use self::error::{Error, Result};
