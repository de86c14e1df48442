use std::fmt;
use std::future::Future;

/// Capability to perform a GET for a URL.
///
/// [`fetch_fruit`](crate::fetch_fruit) depends on this trait rather than on a
/// concrete client, so tests can hand it a stand-in that resolves or rejects
/// without touching the network.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Stand-ins in tests
pub trait Requester: Send + Sync {
    /// Value produced by a successful request, returned to the caller as-is.
    type Response: Send;

    /// Failure of a request.
    ///
    /// Only the display form survives wrapping, so plain strings are fine.
    type Error: fmt::Display + Send + 'static;

    /// Issue a single GET against `url`.
    fn get(&self, url: &str) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use serde_json::Value;

    use crate::data::FruitResponse;
    use crate::effects::client::{ClientSetting, ClientSettingError};

    /// Production requester backed by `reqwest`.
    ///
    /// Non-success status codes are reported as errors and bodies are decoded
    /// as JSON.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Create a client with default settings.
        pub fn new() -> Result<Self, ClientSettingError> { Self::with_setting(ClientSetting::default()) }

        /// Create a client from explicit settings.
        pub fn with_setting(setting: ClientSetting) -> Result<Self, ClientSettingError> {
            let client = setting.build()?;
            Ok(Self { client })
        }
    }

    impl From<reqwest::Client> for ReqwestClient {
        fn from(client: reqwest::Client) -> Self { Self { client } }
    }

    impl Requester for ReqwestClient {
        type Response = FruitResponse;
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<Self::Response, Self::Error> {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let status = response.status().as_u16();
            let data = response.json::<Value>().await?;

            Ok(FruitResponse::new(status, data))
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
