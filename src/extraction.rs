use super::*;

/// The outcome of one extraction run.
#[derive(Debug)]
pub struct Extraction {
  pub tags: Tags,
  pub stop: StopReason,
}

/// Why scanning stopped.
#[derive(Debug)]
pub enum StopReason {
  /// The tokenizer reached the end of the input.
  EndOfStream,
  /// A `<body>` start tag was reached.
  Body,
  /// The reader failed; `tags` holds whatever was gathered before.
  ReadFailed(Error),
}

impl StopReason {
  /// Whether the whole preamble was scanned.
  #[must_use]
  pub fn is_complete(&self) -> bool {
    !matches!(self, Self::ReadFailed(_))
  }
}

impl fmt::Display for StopReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EndOfStream => f.write_str("end of stream"),
      Self::Body => f.write_str("reached <body>"),
      Self::ReadFailed(error) => write!(f, "{error}"),
    }
  }
}

