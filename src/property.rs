use super::*;

/// A recognized `property`/`name` identifier on a `<meta>` tag.
///
/// Each identifier writes its [`target`](Property::target) field and, when
/// it has one, fills its [`fallback`](Property::fallback) field if that field
/// is still empty at the moment the tag is seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
  Description,
  Author,
  OgTitle,
  OgDescription,
  OgImage,
  OgSiteName,
  OgPublisher,
  OgAuthor,
  TwitterTitle,
  TwitterDescription,
  TwitterImage,
  TwitterCard,
  TwitterPlayer,
  TwitterPlayerWidth,
  TwitterPlayerHeight,
}

impl Property {
  /// Every identifier, in the order they are checked against a tag.
  pub const ALL: [Property; 15] = [
    Property::Description,
    Property::Author,
    Property::OgTitle,
    Property::OgDescription,
    Property::OgImage,
    Property::OgSiteName,
    Property::OgPublisher,
    Property::OgAuthor,
    Property::TwitterTitle,
    Property::TwitterDescription,
    Property::TwitterImage,
    Property::TwitterCard,
    Property::TwitterPlayer,
    Property::TwitterPlayerWidth,
    Property::TwitterPlayerHeight,
  ];

  #[must_use]
  pub fn fallback(self) -> Option<Field> {
    match self {
      Property::OgTitle | Property::TwitterTitle => Some(Field::Title),
      Property::OgDescription | Property::TwitterDescription => {
        Some(Field::Description)
      }
      Property::OgAuthor => Some(Field::Author),
      Property::TwitterImage => Some(Field::OgImage),
      _ => None,
    }
  }

  #[must_use]
  pub fn identifier(self) -> &'static str {
    match self {
      Property::Description => "description",
      Property::Author => "author",
      Property::OgTitle => "og:title",
      Property::OgDescription => "og:description",
      Property::OgImage => "og:image",
      Property::OgSiteName => "og:site_name",
      Property::OgPublisher => "og:publisher",
      Property::OgAuthor => "og:author",
      Property::TwitterTitle => "twitter:title",
      Property::TwitterDescription => "twitter:description",
      Property::TwitterImage => "twitter:image",
      Property::TwitterCard => "twitter:card",
      Property::TwitterPlayer => "twitter:player",
      Property::TwitterPlayerWidth => "twitter:player:width",
      Property::TwitterPlayerHeight => "twitter:player:height",
    }
  }

  #[must_use]
  pub fn target(self) -> Field {
    match self {
      Property::Description => Field::Description,
      Property::Author => Field::Author,
      Property::OgTitle => Field::OgTitle,
      Property::OgDescription => Field::OgDescription,
      Property::OgImage => Field::OgImage,
      Property::OgSiteName => Field::OgSiteName,
      Property::OgPublisher => Field::OgPublisher,
      Property::OgAuthor => Field::OgAuthor,
      Property::TwitterTitle => Field::TwitterTitle,
      Property::TwitterDescription => Field::TwitterDescription,
      Property::TwitterImage => Field::TwitterImage,
      Property::TwitterCard => Field::TwitterCard,
      Property::TwitterPlayer => Field::TwitterPlayer,
      Property::TwitterPlayerWidth => Field::TwitterPlayerWidth,
      Property::TwitterPlayerHeight => Field::TwitterPlayerHeight,
    }
  }
}

impl fmt::Display for Property {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.identifier())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq, std::collections::HashSet};

  #[test]
  fn identifiers_are_distinct() {
    let identifiers = Property::ALL
      .into_iter()
      .map(Property::identifier)
      .collect::<HashSet<_>>();

    assert_eq!(identifiers.len(), Property::ALL.len());
  }

  #[test]
  fn fallbacks() {
    let fallbacks = Property::ALL
      .into_iter()
      .filter_map(|property| {
        property.fallback().map(|field| (property, field))
      })
      .collect::<Vec<_>>();

    assert_eq!(
      fallbacks,
      vec![
        (Property::OgTitle, Field::Title),
        (Property::OgDescription, Field::Description),
        (Property::OgAuthor, Field::Author),
        (Property::TwitterTitle, Field::Title),
        (Property::TwitterDescription, Field::Description),
        (Property::TwitterImage, Field::OgImage),
      ]
    );
  }

  #[test]
  fn no_property_targets_the_title() {
    assert!(
      Property::ALL
        .into_iter()
        .all(|property| property.target() != Field::Title)
    );
  }
}
