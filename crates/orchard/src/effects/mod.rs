//! Operations that wait on time or on the network.
//!
//! Network access goes through the [`Requester`] trait so callers decide
//! which client runs.

#[cfg(feature = "reqwest")]
mod client;
mod fruit;
mod hello;
mod http;

#[cfg(feature = "reqwest")]
pub use client::{ClientSetting, ClientSettingError};
pub use fruit::fetch_fruit;
#[cfg(feature = "reqwest")]
pub use fruit::fetch_fruit_default;
pub use hello::{HELLO_DELAY, fetch_hello};
pub use http::Requester;
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
