// Composition root for the faculty application.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory event store and the command bus.
// - Wire the configured command handlers.

pub mod config;
pub mod state;
