#![allow(dead_code)]

pub mod dns_server_mock;
pub mod queries;
pub mod upstream;

pub use dns_server_mock::{MockDnsServer, MockReply};
pub use queries::{build_query, build_query_with_flags, exchange, send_and_expect_silence};
pub use upstream::StaticUpstream;
