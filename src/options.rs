/// Default cap, in bytes, applied to every extracted field.
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorOptions {
  /// Maximum length in bytes of any extracted field. Longer values are cut
  /// at a character boundary. `None` keeps values whole.
  pub max_field_length: Option<usize>,
}

impl Default for ExtractorOptions {
  fn default() -> Self {
    Self {
      max_field_length: Some(DEFAULT_MAX_FIELD_LENGTH),
    }
  }
}

impl ExtractorOptions {
  #[must_use]
  pub fn builder() -> ExtractorOptionsBuilder {
    ExtractorOptionsBuilder::default()
  }
}

#[derive(Default)]
pub struct ExtractorOptionsBuilder {
  inner: ExtractorOptions,
}

impl ExtractorOptionsBuilder {
  #[must_use]
  pub fn build(self) -> ExtractorOptions {
    self.inner
  }

  #[must_use]
  pub fn max_field_length(self, max_field_length: Option<usize>) -> Self {
    Self {
      inner: ExtractorOptions {
        max_field_length,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn uncapped(self) -> Self {
    self.max_field_length(None)
  }
}
