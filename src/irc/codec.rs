//! Newline-delimited line codec.
//!
//! Incoming bytes are split at `\n` and stripped of any trailing `\r`/`\n`.
//! Outgoing lines get a single `\n` appended. There is no line length limit.

use bytes::{BufMut, BytesMut};
use std::io;
use tokio_util::codec::{Decoder, Encoder};

/// Splits a byte stream into IRC lines and terminates outgoing ones.
#[derive(Debug, Default)]
pub struct LineCodec {
    /// Index of the next byte to scan for a newline.
    next_index: usize,
}

impl LineCodec {
    pub fn new() -> Self {
        Self::default()
    }
}

fn to_line(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    text.trim_end_matches(['\r', '\n']).to_string()
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> io::Result<Option<String>> {
        match src[self.next_index..].iter().position(|b| *b == b'\n') {
            Some(offset) => {
                let raw = src.split_to(self.next_index + offset + 1);
                self.next_index = 0;
                Ok(Some(to_line(&raw)))
            }
            None => {
                self.next_index = src.len();
                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> io::Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        self.next_index = 0;
        if src.is_empty() {
            return Ok(None);
        }
        // Unterminated fragment left when the peer closed.
        let raw = src.split_to(src.len());
        Ok(Some(to_line(&raw)))
    }
}

impl<T: AsRef<str>> Encoder<T> for LineCodec {
    type Error = io::Error;

    fn encode(&mut self, line: T, dst: &mut BytesMut) -> io::Result<()> {
        let line = line.as_ref();
        dst.reserve(line.len() + 1);
        dst.put_slice(line.as_bytes());
        if !line.ends_with('\n') {
            dst.put_u8(b'\n');
        }
        Ok(())
    }
}
