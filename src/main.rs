use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  meta_extractor::{Extractor, ExtractorOptions, StopReason},
  std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
    process,
  },
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  let arguments = Arguments::parse();

  arguments.init_logging();

  if let Err(error) = arguments.run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
