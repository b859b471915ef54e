//! Sentry DNS Application Layer
//!
//! Ports the infrastructure implements, and the use cases that drive them:
//! per-question resolution, response assembly, request handling and
//! startup seeding of the cache store.

pub mod ports;
pub mod use_cases;
