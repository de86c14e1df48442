use tracing::{debug, warn};

use crate::core::fruit_url;
use crate::data::Deferred;
use crate::effects::http::Requester;
use crate::error::Error;

/// Fetch `database` from the fruit API through `requester`.
///
/// Issues exactly one GET against [`fruit_url`]`(database)`. A successful
/// response is passed through unchanged. A failure is replaced by
/// [`Error::Fetch`] holding the display form of the original, so the message
/// reads `"fetchFruit: {original}"`.
pub fn fetch_fruit<'r, R>(database: &str, requester: &'r R) -> Deferred<'r, R::Response, Error>
where
    R: Requester,
    R::Response: 'r,
{
    let url = fruit_url(database);

    Deferred::new(async move {
        debug!(%url, "requesting fruit");
        requester.get(&url).await.map_err(|err| {
            warn!(%url, error = %err, "fruit request failed");
            Error::fetch(err)
        })
    })
}

/// [`fetch_fruit`] with a production [`ReqwestClient`](crate::ReqwestClient)
/// built for this call.
///
/// A client that fails to build is reported the same way as a failed request.
#[cfg(feature = "reqwest")]
pub fn fetch_fruit_default(database: &str) -> Deferred<'static, crate::data::FruitResponse, Error> {
    let database = database.to_owned();

    Deferred::new(async move {
        let client = crate::effects::http::ReqwestClient::new().map_err(Error::fetch)?;
        fetch_fruit(&database, &client).await
    })
}
