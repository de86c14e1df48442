use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::future::{self, BoxFuture, FutureExt};
use tokio::task::JoinHandle;

/// A result that becomes available later.
///
/// A `Deferred` settles exactly once, either with a value or with an error.
/// It can be consumed in two ways that observe the same outcome:
///
/// - directly, with `.await`, since it implements [`Future`];
/// - by attaching continuations with [`then`](Self::then),
///   [`catch`](Self::catch) or [`on_settled`](Self::on_settled).
///
/// Every combinator takes `self` by value, so a settled value can never be
/// observed twice. There is no cancellation beyond dropping the value.
///
/// # Examples
///
/// ```
/// use orchard::Deferred;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// let shouted = rt.block_on(
///     Deferred::<_, String>::resolved("hi").then(|s| s.to_uppercase()),
/// );
/// assert_eq!(shouted, Ok("HI".to_string()));
/// ```
#[must_use = "a Deferred does nothing unless awaited or settled"]
pub struct Deferred<'a, T, E> {
    inner: BoxFuture<'a, Result<T, E>>,
}

impl<'a, T: 'a, E: 'a> Deferred<'a, T, E> {
    /// Wrap a future producing a `Result`.
    pub fn new<F>(fut: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'a,
    {
        Self { inner: fut.boxed() }
    }

    /// A computation that is already resolved with `value`.
    pub fn resolved(value: T) -> Self
    where
        T: Send,
        E: Send,
    {
        Self::new(future::ready(Ok(value)))
    }

    /// A computation that is already rejected with `error`.
    pub fn rejected(error: E) -> Self
    where
        T: Send,
        E: Send,
    {
        Self::new(future::ready(Err(error)))
    }

    /// Attach a continuation that runs on the resolved value.
    ///
    /// Errors pass through untouched.
    pub fn then<U, F>(self, f: F) -> Deferred<'a, U, E>
    where
        U: 'a,
        F: FnOnce(T) -> U + Send + 'a,
    {
        Deferred { inner: self.inner.map(move |res| res.map(f)).boxed() }
    }

    /// Attach a continuation that runs on the error.
    ///
    /// Values pass through untouched.
    pub fn catch<G, F>(self, f: F) -> Deferred<'a, T, G>
    where
        G: 'a,
        F: FnOnce(E) -> G + Send + 'a,
    {
        Deferred { inner: self.inner.map(move |res| res.map_err(f)).boxed() }
    }
}

impl<T, E> Deferred<'static, T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Drive the computation on the current tokio runtime and hand its outcome
    /// to `callback` once it settles.
    ///
    /// The callback runs exactly once. Awaiting the returned handle waits
    /// until the callback has returned.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a tokio runtime.
    pub fn on_settled<F>(self, callback: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<T, E>) + Send + 'static,
    {
        tokio::spawn(async move { callback(self.await) })
    }
}

impl<T, E> Future for Deferred<'_, T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.poll_unpin(cx)
    }
}

impl<T, E> fmt::Debug for Deferred<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").field("inner", &"{ ... }").finish()
    }
}
