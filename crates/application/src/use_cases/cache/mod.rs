mod seed_cache;

pub use seed_cache::{SeedCacheUseCase, SeedOutcome};
