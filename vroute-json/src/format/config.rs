use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vroute_core::routing::{RouterKind, Server};

/// External configuration driving ingestion: which routing engine computes travel costs from
/// coordinates and which output options the solver should honor.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// A routing engine used for instances without a custom cost matrix.
    #[serde(default)]
    pub router: RouterKind,
    /// Profile to server address mapping for remote routing engines.
    #[serde(default)]
    pub servers: HashMap<String, Server>,
    /// Whether route geometry should be added to the solution output.
    #[serde(default)]
    pub geometry: bool,
}
