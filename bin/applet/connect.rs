use crate::io::{Io, Pipe};
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::ErrorKind::UnexpectedEof;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::io::{stdin, stdout};
use tokio::net::TcpStream;
use tracing::{info, instrument};

/// Connects to a chess server and relays commands typed on stdin.
#[derive(Debug, Parser)]
pub struct Connect {
    /// Address of the server.
    #[clap(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    interface: IpAddr,

    /// Port the server listens on.
    #[clap(short, long, default_value_t = 2000)]
    port: u16,
}

impl Default for Connect {
    fn default() -> Self {
        Connect {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 2000,
        }
    }
}

impl Connect {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let stream = TcpStream::connect(SocketAddr::new(self.interface, self.port)).await?;
        info!(address = %stream.peer_addr()?, "connected");

        let (reader, writer) = stream.into_split();
        let mut remote = Pipe::new(writer, reader);
        let mut local = Pipe::new(stdout(), stdin());

        loop {
            tokio::select! {
                msg = local.recv() => match msg {
                    Ok(msg) => {
                        remote.send(&msg).await?;
                        remote.flush().await?;
                    }

                    Err(e) if e.kind() == UnexpectedEof => break Ok(()),
                    Err(e) => break Err(e.into()),
                },

                msg = remote.recv() => match msg {
                    Ok(msg) => {
                        local.send(&msg).await?;
                        local.flush().await?;
                    }

                    Err(e) if e.kind() == UnexpectedEof => break Ok(()),
                    Err(e) => break Err(e.into()),
                },
            }
        }
    }
}
