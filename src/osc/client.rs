use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::{lookup_host, UdpSocket};

use super::message::OscMessage;

/// UDP sender for OSC messages
///
/// Bound to an ephemeral port of the target's address family and
/// connected once at startup; every message is one datagram.
#[derive(Debug)]
pub struct OscClient {
    socket: UdpSocket,
    target: SocketAddr,
}

impl OscClient {
    /// Resolve `host:port` and connect a UDP socket to it
    pub async fn connect(host: &str, port: u16) -> io::Result<Self> {
        let target = lookup_host((host, port)).await?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("could not resolve {}:{}", host, port),
            )
        })?;

        let bind_addr: SocketAddr = if target.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(target).await?;

        Ok(Self { socket, target })
    }

    /// Send one message as a single datagram
    pub async fn send(&self, message: &OscMessage) -> io::Result<()> {
        self.socket.send(&message.to_bytes()).await?;

        tracing::debug!(
            to = %self.target,
            address = %message.address,
            "OSC message sent"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_send_reaches_receiver() {
        let receiver = assert_ok!(UdpSocket::bind("127.0.0.1:0").await);
        let addr = assert_ok!(receiver.local_addr());

        let client = assert_ok!(OscClient::connect("127.0.0.1", addr.port()).await);
        let message = OscMessage::float("/ch/1", 0.25);
        assert_ok!(client.send(&message).await);

        let mut buf = [0u8; 64];
        let len = assert_ok!(receiver.recv(&mut buf).await);
        assert_eq!(&buf[..len], message.to_bytes().as_slice());
    }

    #[tokio::test]
    async fn test_alert_flag_round_trip() {
        let receiver = assert_ok!(UdpSocket::bind("127.0.0.1:0").await);
        let addr = assert_ok!(receiver.local_addr());

        let client = assert_ok!(OscClient::connect("127.0.0.1", addr.port()).await);
        assert_ok!(client.send(&OscMessage::int("/ch/2", 1)).await);

        let mut buf = [0u8; 64];
        let len = assert_ok!(receiver.recv(&mut buf).await);
        assert_eq!(len, 16);
        assert_eq!(&buf[12..16], &[0x00, 0x00, 0x00, 0x01]);
    }
}
