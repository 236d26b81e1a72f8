//! Routing capabilities: travel cost providers selected at ingestion time and consumed by the
//! solver. Remote variants are plain data holders here, issuing actual requests is up to the
//! solver's clients.

mod great_circle;
pub use self::great_circle::GreatCircleRouter;

use serde::{Deserialize, Serialize};

/// A routing engine integration to use for travel cost computation.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RouterKind {
    /// A remote osrm-routed HTTP service.
    #[default]
    Osrm,
    /// An embedded great circle approximation.
    GreatCircle,
    /// A remote openrouteservice HTTP service.
    Ors,
}

/// A routing server address.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Server {
    /// A server host.
    pub host: String,
    /// A server port.
    pub port: String,
}

impl Server {
    /// Creates a new `Server`.
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self { host: host.into(), port: port.into() }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new("0.0.0.0", "5000")
    }
}

/// A routing capability bound to the common vehicle profile of the instance.
#[derive(Clone, Debug)]
pub enum Router {
    /// An osrm-routed HTTP service.
    Osrm {
        /// A routing profile.
        profile: String,
        /// A server address to query.
        server: Server,
    },
    /// An embedded great circle approximation.
    GreatCircle(GreatCircleRouter),
    /// An openrouteservice HTTP service.
    Ors {
        /// A routing profile.
        profile: String,
        /// A server address to query.
        server: Server,
    },
}

impl Router {
    /// Returns the profile the capability was constructed for.
    pub fn profile(&self) -> &str {
        match self {
            Router::Osrm { profile, .. } | Router::Ors { profile, .. } => profile,
            Router::GreatCircle(router) => router.profile(),
        }
    }
}
