use async_trait::async_trait;
use std::io;

mod pipe;

pub use pipe::*;

/// Trait for types that communicate via line-framed text messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Io {
    /// Receives a message.
    async fn recv(&mut self) -> io::Result<String>;

    /// Sends a message.
    async fn send(&mut self, msg: &str) -> io::Result<()>;

    /// Flushes the internal buffers.
    async fn flush(&mut self) -> io::Result<()>;
}
