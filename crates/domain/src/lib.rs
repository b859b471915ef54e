//! Sentry DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordClass, RecordType};
pub use dns_request::{normalize_domain, DnsRequest};
pub use errors::DomainError;
pub use wire::{Answer, AnswerName, Header, Message, Name, Question, WireError};
