use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response handed back by the production requester.
///
/// Mirrors the `{ status, data }` envelope that HTTP clients conventionally
/// return, so `response.data["fruits"]` reads the same whether the value came
/// from the network or from a stand-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FruitResponse {
    /// HTTP status code of the reply.
    pub status: u16,

    /// Decoded JSON body.
    pub data: Value,
}

impl FruitResponse {
    pub fn new(status: u16, data: Value) -> Self { Self { status, data } }
}
