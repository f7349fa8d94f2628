/// Agents and policies
pub mod agent;

/// Environment
pub mod env;

/// Bundled environments
pub mod gym;
