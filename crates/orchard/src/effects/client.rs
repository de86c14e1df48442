use reqwest::{Client, Proxy, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientSettingError {
    #[error("rejected proxy {url}: {source}")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// How the production requester reaches the fruit API.
///
/// - `proxies: None` keeps reqwest's own handling of the proxy environment
///   variables.
/// - `proxies: Some(list)` ignores the environment and routes only through
///   `list`. An empty list means a direct connection.
#[derive(Debug, Clone, Default)]
pub struct ClientSetting {
    pub proxies: Option<Vec<Url>>,
}

impl ClientSetting {
    /// Connect directly, ignoring any proxy environment variables.
    pub fn direct() -> Self { Self { proxies: Some(Vec::new()) } }

    pub fn with_proxy(mut self, url: Url) -> Self {
        self.proxies.get_or_insert_with(Vec::new).push(url);
        self
    }

    pub fn build(self) -> Result<Client, ClientSettingError> {
        let mut cb = Client::builder();

        if let Some(proxies) = self.proxies {
            cb = cb.no_proxy();
            for url in &proxies {
                cb = cb.proxy(proxy_for(url)?);
            }
        }

        Ok(cb.build()?)
    }
}

/// An `https` proxy URL carries https traffic, anything else carries plain http.
fn proxy_for(url: &Url) -> Result<Proxy, ClientSettingError> {
    let proxy = match url.scheme() {
        "https" => Proxy::https(url.as_str()),
        _ => Proxy::http(url.as_str()),
    };
    proxy.map_err(|source| ClientSettingError::Proxy { url: url.to_string(), source })
}
