/// Host the fruit API is served from.
pub const API_HOST: &str = "localhost";

/// Port the fruit API listens on.
pub const API_PORT: u16 = 3000;

/// Path prefix in front of the database name.
pub const API_PREFIX: &str = "/api";

/// Build the endpoint for `database`.
///
/// The name is interpolated as-is, without percent-encoding.
///
/// ```
/// use orchard::fruit_url;
///
/// assert_eq!(fruit_url("fruit"), "http://localhost:3000/api/fruit");
/// ```
pub fn fruit_url(database: &str) -> String { format!("http://{API_HOST}:{API_PORT}{API_PREFIX}/{database}") }
