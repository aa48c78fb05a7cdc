use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod connect;
mod serve;

#[derive(From, Subcommand)]
pub enum Applet {
    Connect(connect::Connect),
    Serve(serve::Serve),
}

impl Default for Applet {
    fn default() -> Self {
        serve::Serve::default().into()
    }
}

impl Applet {
    pub async fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Connect(a) => Ok(a.execute().await?),
            Applet::Serve(a) => Ok(a.execute().await?),
        }
    }
}
