use crate::io::{Io, Pipe};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Game;
use lib::protocol::{describe, Command};
use std::io::ErrorKind::UnexpectedEof;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, instrument, warn};

/// Hosts chess games over TCP, one independent game per connection.
#[derive(Debug, Parser)]
pub struct Serve {
    /// Address of the interface to listen on.
    #[clap(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    interface: IpAddr,

    /// Port to listen on.
    #[clap(short, long, default_value_t = 2000)]
    port: u16,
}

impl Default for Serve {
    fn default() -> Self {
        Serve {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 2000,
        }
    }
}

impl Serve {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let listener = TcpListener::bind(SocketAddr::new(self.interface, self.port)).await?;
        info!(address = %listener.local_addr()?, "listening");

        loop {
            let (stream, peer) = listener.accept().await?;
            info!(%peer, "connected");

            tokio::spawn(async move {
                match Session::from(stream).run().await {
                    Ok(_) => info!(%peer, "disconnected"),
                    Err(e) => warn!(%peer, "session aborted: {:?}", e),
                }
            });
        }
    }
}

/// One chess game, played over one line-framed connection.
struct Session<T: Io> {
    game: Game,
    io: T,
}

impl From<TcpStream> for Session<Pipe<OwnedWriteHalf, OwnedReadHalf>> {
    fn from(stream: TcpStream) -> Self {
        let (reader, writer) = stream.into_split();

        Session {
            game: Game::new(),
            io: Pipe::new(writer, reader),
        }
    }
}

impl<T: Io> Session<T> {
    /// Serves one request per line until the peer hangs up.
    async fn run(&mut self) -> Result<(), Anyhow> {
        loop {
            let msg = match self.io.recv().await {
                Ok(msg) => msg,
                Err(e) if e.kind() == UnexpectedEof => break Ok(()),
                Err(e) => break Err(e.into()),
            };

            match msg.parse() {
                Err(e) => {
                    warn!("{}: `{}`", e, msg);
                    self.io.send("Invalid request").await?;
                }

                Ok(Command::DisplayBoard) => {
                    self.io.send(&self.game.board().to_string()).await?;
                }

                Ok(Command::Move(m)) => match self.game.attempt_move(m) {
                    Ok(record) => self.io.send(&describe(&record)).await?,

                    Err(e) => {
                        warn!("{}", e);
                        self.io.send("Invalid Move").await?;
                    }
                },
            }

            self.io.flush().await?;
        }
    }
}
