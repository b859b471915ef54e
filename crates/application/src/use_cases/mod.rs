pub mod cache;
pub mod dns;

pub use cache::{SeedCacheUseCase, SeedOutcome};
pub use dns::{HandleDnsRequestUseCase, ResolveQuestionsUseCase, ResponseAssembler};
