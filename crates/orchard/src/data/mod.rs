//! Immutable values passed between the pure core and the effects layer.

mod deferred;
mod response;

pub use deferred::Deferred;
pub use response::FruitResponse;
