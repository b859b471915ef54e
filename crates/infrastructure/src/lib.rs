//! Sentry DNS Infrastructure Layer
//!
//! Adapters behind the application ports (cache store, feed files,
//! upstream resolvers) and the UDP request pipeline.

pub mod cache;
pub mod feeds;
pub mod server;
pub mod upstream;
