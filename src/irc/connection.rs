use crate::irc::codec::LineCodec;
use futures::{SinkExt, StreamExt};
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio_util::codec::{FramedRead, FramedWrite};

/// Line-oriented transport to the IRC server.
///
/// Every outgoing line goes through [`Connection::send`].
pub struct Connection<R, W> {
    lines: FramedRead<R, LineCodec>,
    sink: FramedWrite<W, LineCodec>,
}

pub type TcpConnection = Connection<OwnedReadHalf, OwnedWriteHalf>;

impl TcpConnection {
    pub async fn connect(host: &str, port: u16) -> io::Result<Self> {
        let stream = TcpStream::connect((host, port)).await?;
        stream.set_nodelay(true)?;
        let (reader, writer) = stream.into_split();
        Ok(Connection::new(reader, writer))
    }
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: FramedRead::new(reader, LineCodec::new()),
            sink: FramedWrite::new(writer, LineCodec::new()),
        }
    }

    /// Next line from the server, or `None` once the stream has ended.
    pub async fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next().await.transpose()
    }

    /// Write one line and flush it.
    pub async fn send(&mut self, line: &str) -> io::Result<()> {
        tracing::debug!("<< {}", line);
        self.sink.send(line).await
    }

    pub async fn send_privmsg(&mut self, target: &str, text: &str) -> io::Result<()> {
        // No line injection through reply text
        let clean: String = text.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        self.send(&format!("PRIVMSG {} :{}", target, clean)).await
    }

    pub async fn send_pong(&mut self, token: &str) -> io::Result<()> {
        self.send(&format!("PONG {}", token)).await
    }
}
