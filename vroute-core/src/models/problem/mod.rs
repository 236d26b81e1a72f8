//! Problem entities: the plan side (jobs, shipments) and the fleet side (vehicles).

mod fleet;
pub use self::fleet::*;

mod jobs;
pub use self::jobs::*;
