// GraphQL Chat Gateway - server core
//
// Single-endpoint HTTP service: routes requests into a juniper schema with a
// per-request context and hands chat messages to an upstream completion provider.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
