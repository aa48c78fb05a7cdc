use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tokio::runtime;
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Chessline's command line interface.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// The applet to run; defaults to `serve`.
    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Initializes diagnostics and drives the selected applet to completion.
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.init_tracing();

        runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(self.applet.unwrap_or_default().execute())
    }

    fn init_tracing(&self) {
        let targets = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let sink = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(targets).with(sink).init();
    }
}
