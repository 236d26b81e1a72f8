use rustc_hash::FxHashSet;

/// Specifies an entity id type.
pub type Id = u64;

/// Specifies a duration in abstract time units.
pub type Duration = u64;

/// Specifies a travel cost.
pub type Cost = u64;

/// Specifies a skill identifier.
pub type Skill = u64;

/// Specifies a job priority.
pub type Priority = u32;

/// A set of skill identifiers required by a job or provided by a vehicle.
pub type Skills = FxHashSet<Skill>;

/// A maximum allowed job priority value.
pub const MAX_PRIORITY: Priority = 100;

/// A routing profile assumed for vehicles which do not specify one.
pub const DEFAULT_PROFILE: &str = "car";
