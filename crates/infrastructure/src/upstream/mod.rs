mod forwarding;
mod system;
mod transport;

pub use forwarding::{ForwardingResolver, MessageBuilder, ResponseParser, UpstreamResponse};
pub use system::SystemResolver;
pub use transport::UdpTransport;
