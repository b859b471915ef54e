#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_feeds;
pub mod mock_store;
pub mod mock_upstream;
pub mod requests;

pub use mock_feeds::{MockBlacklistSource, MockKnownHostsSource};
pub use mock_store::MockCacheStore;
pub use mock_upstream::MockUpstreamResolver;
pub use requests::{question, request_header};
