// Line-oriented TCP command client
use crate::application::ports::CommandTransport;
use crate::domain::command::{RobotCommand, NO_RESPONSE};
use crate::error::ConnectionError;
use crate::infrastructure::endpoint_resolver::{Endpoint, EndpointResolver};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

/// Sends one command per connection: write `COMMAND\n`, read one line, close.
#[derive(Debug, Clone)]
pub struct TcpCommandTransport {
    resolver: EndpointResolver,
}

impl TcpCommandTransport {
    pub fn new(resolver: EndpointResolver) -> Self {
        Self { resolver }
    }

    async fn exchange(endpoint: &Endpoint, command: &str) -> std::io::Result<String> {
        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port)).await?;
        let (read_half, mut write_half) = stream.into_split();

        write_half.write_all(format!("{}\n", command).as_bytes()).await?;
        write_half.flush().await?;

        let mut reader = BufReader::new(read_half);
        let mut line = Vec::new();
        let read = reader.read_until(b'\n', &mut line).await?;

        if read == 0 {
            return Ok(NO_RESPONSE.to_string());
        }
        // Lossy decode: the command is already delivered at this point.
        let text = String::from_utf8_lossy(&line);
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[async_trait]
impl CommandTransport for TcpCommandTransport {
    async fn send(&self, command: RobotCommand) -> Result<String, ConnectionError> {
        let wire = command.as_str();
        let (endpoint, response) = self
            .resolver
            .first_success(|endpoint| async move { Self::exchange(&endpoint, wire).await })
            .await?;

        tracing::debug!("{} -> {} answered {:?}", wire, endpoint, response);
        Ok(response)
    }

    async fn probe(&self) -> Result<(), ConnectionError> {
        let (endpoint, ()) = self
            .resolver
            .first_success(|endpoint| async move {
                TcpStream::connect((endpoint.host.as_str(), endpoint.port))
                    .await
                    .map(drop)
            })
            .await?;

        tracing::info!("Connected to robot server at {}", endpoint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    /// A robot server that answers every line with `reply`, `count` times.
    async fn spawn_server(reply: Option<&'static str>, count: usize) -> (u16, tokio::task::JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let mut received = Vec::new();
            for _ in 0..count {
                let (socket, _) = listener.accept().await.unwrap();
                let (read_half, mut write_half) = socket.into_split();
                let mut reader = BufReader::new(read_half);
                let mut line = String::new();
                reader.read_line(&mut line).await.unwrap();
                received.push(line);
                if let Some(reply) = reply {
                    write_half.write_all(format!("{}\n", reply).as_bytes()).await.unwrap();
                }
            }
            received
        });
        (port, handle)
    }

    /// A loopback port with nothing listening on it.
    async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_send_to_primary() {
        let (port, server) = spawn_server(Some("OK moteurs demarres"), 1).await;
        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", port),
        ]));

        let response = transport.send(RobotCommand::Start).await.unwrap();
        assert_eq!(response, "OK moteurs demarres");
        assert_eq!(server.await.unwrap(), vec!["START\n"]);
    }

    #[tokio::test]
    async fn test_send_falls_back_to_secondary() {
        let refused = closed_port().await;
        let (port, server) = spawn_server(Some("OK"), 1).await;
        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", refused),
            Endpoint::new("127.0.0.1", port),
        ]));

        let response = transport.send(RobotCommand::DirectLeft).await.unwrap();
        assert_eq!(response, "OK");
        assert_eq!(server.await.unwrap(), vec!["DIRECT_LEFT\n"]);
    }

    /// A server that reads one line, then answers with raw `reply` bytes.
    async fn spawn_raw_server(reply: &'static [u8]) -> (u16, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = socket.into_split();
            let mut reader = BufReader::new(read_half);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            write_half.write_all(reply).await.unwrap();
            line
        });
        (port, handle)
    }

    #[tokio::test]
    async fn test_non_utf8_reply_is_kept_without_resending() {
        let (primary, primary_server) = spawn_raw_server(b"Moteurs d\xe9marr\xe9s\n").await;

        let secondary_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let secondary = secondary_listener.local_addr().unwrap().port();

        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", primary),
            Endpoint::new("127.0.0.1", secondary),
        ]));

        let response = transport.send(RobotCommand::Start).await.unwrap();
        assert_eq!(response, "Moteurs d\u{FFFD}marr\u{FFFD}s");
        assert_eq!(primary_server.await.unwrap(), "START\n");

        let contacted = tokio::time::timeout(
            std::time::Duration::from_millis(100),
            secondary_listener.accept(),
        )
        .await;
        assert!(contacted.is_err(), "secondary endpoint must not be contacted");
    }

    #[tokio::test]
    async fn test_reset_after_read_falls_back_to_secondary() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let primary = listener.local_addr().unwrap().port();
        let primary_server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(socket);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap();
            let socket = reader.into_inner();
            socket.set_linger(Some(std::time::Duration::ZERO)).unwrap();
            drop(socket);
            line
        });
        let (secondary, secondary_server) = spawn_server(Some("OK second"), 1).await;

        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", primary),
            Endpoint::new("127.0.0.1", secondary),
        ]));

        let response = transport.send(RobotCommand::DirectFront).await.unwrap();
        assert_eq!(response, "OK second");
        assert_eq!(primary_server.await.unwrap(), "DIRECT_FRONT\n");
        assert_eq!(secondary_server.await.unwrap(), vec!["DIRECT_FRONT\n"]);
    }

    #[tokio::test]
    async fn test_silent_server_yields_sentinel() {
        let (port, _server) = spawn_server(None, 1).await;
        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", port),
        ]));

        let response = transport.send(RobotCommand::Stop).await.unwrap();
        assert_eq!(response, NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_both_endpoints_unreachable() {
        let first = closed_port().await;
        let second = closed_port().await;
        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", first),
            Endpoint::new("127.0.0.1", second),
        ]));

        let err = transport.send(RobotCommand::Start).await.unwrap_err();
        assert_eq!(err, ConnectionError::unreachable());
        assert!(transport.probe().await.is_err());
    }

    #[tokio::test]
    async fn test_reachability_check_sends_no_payload() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(socket);
            let mut line = String::new();
            reader.read_line(&mut line).await.unwrap()
        });

        let transport = TcpCommandTransport::new(EndpointResolver::new(vec![
            Endpoint::new("127.0.0.1", port),
        ]));
        transport.probe().await.unwrap();
        assert_eq!(server.await.unwrap(), 0);
    }
}
