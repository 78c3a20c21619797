//! IRC protocol layer: line codec, message parsing, transport and the
//! connection session.

pub mod codec;
pub mod connection;
pub mod message;
pub mod session;
