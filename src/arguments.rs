use super::*;

#[derive(Parser)]
#[command(name = "meta-extractor")]
#[command(
  about = "Extract title, description, Open Graph and Twitter Card tags from an HTML document",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    value_name = "FILE",
    help = "Path to the HTML file to scan; reads stdin when omitted or `-`"
  )]
  input: Option<PathBuf>,
  #[arg(
    long,
    value_name = "BYTES",
    conflicts_with = "uncapped",
    help = "Cut every field to at most this many bytes"
  )]
  max_field_length: Option<usize>,
  #[arg(long, help = "Pretty-print the JSON output")]
  pretty: bool,
  #[arg(long, help = "Keep field values whole, however long")]
  uncapped: bool,
  #[arg(short, long, help = "Log extraction details to stderr")]
  verbose: bool,
}

impl Arguments {
  pub(crate) fn init_logging(&self) {
    let default = if self.verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .init();
  }

  fn options(&self) -> ExtractorOptions {
    let builder = ExtractorOptions::builder();

    if self.uncapped {
      builder.uncapped().build()
    } else if let Some(max_field_length) = self.max_field_length {
      builder.max_field_length(Some(max_field_length)).build()
    } else {
      builder.build()
    }
  }

  fn reader(&self) -> Result<Box<dyn Read>> {
    match self.input.as_deref() {
      Some(path) if path != Path::new("-") => {
        let file = File::open(path).with_context(|| {
          format!("failed to open file `{}`", path.display())
        })?;

        Ok(Box::new(BufReader::new(file)))
      }
      _ => Ok(Box::new(io::stdin().lock())),
    }
  }

  pub(crate) fn run(self) -> Result {
    let extraction = Extractor::new(self.options()).run(self.reader()?);

    if let StopReason::ReadFailed(error) = &extraction.stop {
      tracing::warn!(%error, "input ended early, output is partial");
    }

    let mut stdout = io::stdout().lock();

    let written = if self.pretty {
      serde_json::to_writer_pretty(&mut stdout, &extraction.tags)
    } else {
      serde_json::to_writer(&mut stdout, &extraction.tags)
    };

    written.context("failed to write tags")?;

    writeln!(stdout).context("failed to write tags")?;

    Ok(())
  }
}
