/// Learning agents
pub mod agent;

/// Implemented RL algorithms
pub mod algo;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Testing environments
pub mod gym;

/// Recorded transitions
pub mod memory;

/// Terminal visualization
#[cfg(feature = "viz")]
pub mod viz;

mod util;
