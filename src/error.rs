#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to read document: {source}")]
  Read {
    #[from]
    source: std::io::Error,
  },
}
