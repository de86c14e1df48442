use std::convert::Infallible;
use std::time::Duration;

use crate::data::Deferred;

/// How long [`fetch_hello`] waits before resolving.
pub const HELLO_DELAY: Duration = Duration::from_millis(50);

/// Resolve to `"hello world"` after [`HELLO_DELAY`]. Never fails.
///
/// ```
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// assert_eq!(rt.block_on(orchard::fetch_hello()), Ok("hello world".to_string()));
/// ```
pub fn fetch_hello() -> Deferred<'static, String, Infallible> {
    Deferred::new(async {
        tokio::time::sleep(HELLO_DELAY).await;
        Ok("hello world".to_owned())
    })
}
