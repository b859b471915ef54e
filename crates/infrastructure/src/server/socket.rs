use sentry_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

const SOCKET_BUFFER_SIZE: usize = 512 * 1024;

/// Binds the listening socket. Must be called from within a Tokio runtime.
pub(super) fn bind_udp_socket(socket_addr: SocketAddr) -> Result<UdpSocket, DomainError> {
    create_udp_socket(socket_addr).map_err(|e| DomainError::Bind {
        addr: socket_addr.to_string(),
        reason: e.to_string(),
    })
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
