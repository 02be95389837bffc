// HTTP routes
pub mod fallback;
pub mod graphql;
pub mod health;

pub use fallback::*;
pub use graphql::*;
pub use health::*;
