use std::io::{stdin, stdout};

use anyhow::Context;
use clap::Parser;

use dsdict::session::{Config, Session};

/// An interactive dictionary of binary trees and heaps.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// The value that ends a list of integers.
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    sentinel: i32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    log::debug!("{opts:?}");

    let stdin = stdin();
    let stdout = stdout();
    let config = Config {
        sentinel: opts.sentinel,
    };

    Session::new(stdin.lock(), stdout.lock(), config)
        .run()
        .context("dictionary session failed")
}
