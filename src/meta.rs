use super::*;

const CONTENT: &str = "content";
const NAME: &str = "name";
const PROPERTY: &str = "property";

/// The attributes of one `<meta>` tag that matter for extraction.
///
/// Built by a single linear fold over the tag's attributes: the last
/// `content` attribute wins, and every `name`/`property` value is kept.
/// Keys are never paired with each other, so
/// `<meta content="a" property="og:title">` and
/// `<meta property="og:title" content="a">` are equivalent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTag {
  content: String,
  identifiers: Vec<String>,
}

impl MetaTag {
  #[must_use]
  pub fn content(&self) -> &str {
    &self.content
  }

  pub fn from_attributes<I, K, V>(attributes: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    attributes.into_iter().fold(
      Self::default(),
      |mut meta, (key, value)| {
        match key.as_ref() {
          CONTENT => meta.content = value.into(),
          NAME | PROPERTY => meta.identifiers.push(value.into()),
          _ => {}
        }

        meta
      },
    )
  }

  /// Whether any `name` or `property` attribute equals `identifier`.
  #[must_use]
  pub fn matches(&self, identifier: &str) -> bool {
    self.identifiers.iter().any(|value| value == identifier)
  }

  /// Recognized identifiers carried by this tag, in evaluation order.
  pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
    Property::ALL
      .into_iter()
      .filter(|property| self.matches(property.identifier()))
  }
}
