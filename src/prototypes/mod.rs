//! Local persistence of builder prototypes behind `/api/prototypes`.

/// HTTP routing for the endpoint.
pub mod server;
/// The JSON file the endpoint reads and overwrites.
pub mod store;
