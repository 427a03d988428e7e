//! Command-line front end: reads a raw mappings string from standard input
//! and prints its tokenized and decoded forms.

use anyhow::{Context, Result};
use clap::Parser;
use mapdec::MappingsDocument;
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mapdec")]
#[command(version, disable_version_flag = true)]
#[command(
    about = "Decode the \"mappings\" field of a JavaScript source map read from standard input",
    long_about = None
)]
struct Cli {
    /// Print version information and exit
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mapdec=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let _cli = Cli::parse();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read mappings from stdin")?;
    // shell pipes append a newline, which is not part of the alphabet
    let source = input.trim_end();

    let document = MappingsDocument::tokenize(source);

    println!("Fields:");
    println!(" 1. column in generated file");
    println!(" 2. index in \"sources\"");
    println!(" 3. line in original file");
    println!(" 4. column in original file");
    println!(" 5. index in \"names\"");

    println!("lines: {}", document.lines().len());
    for line in document.lines() {
        println!("line: {line}");
    }

    let resolved = document.decode().context("malformed mappings")?.resolve();

    println!("decoded:");
    for (idx, line) in resolved.lines().iter().enumerate() {
        println!("line {}:", idx + 1);
        println!("{line}");
    }

    Ok(())
}
