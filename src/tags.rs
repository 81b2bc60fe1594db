use super::*;

/// Metadata extracted from the head of an HTML document.
///
/// Every field defaults to the empty string; an empty field means the
/// document did not provide a value for it before `<body>`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Tags {
  pub title: String,
  pub description: String,
  pub author: String,
  pub og_title: String,
  pub og_description: String,
  pub og_image: String,
  pub og_site_name: String,
  pub og_publisher: String,
  pub og_author: String,
  pub twitter_card: String,
  pub twitter_title: String,
  pub twitter_description: String,
  pub twitter_image: String,
  pub twitter_player: String,
  pub twitter_player_width: String,
  pub twitter_player_height: String,
}

impl Tags {
  #[must_use]
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Title => &self.title,
      Field::Description => &self.description,
      Field::Author => &self.author,
      Field::OgTitle => &self.og_title,
      Field::OgDescription => &self.og_description,
      Field::OgImage => &self.og_image,
      Field::OgSiteName => &self.og_site_name,
      Field::OgPublisher => &self.og_publisher,
      Field::OgAuthor => &self.og_author,
      Field::TwitterCard => &self.twitter_card,
      Field::TwitterTitle => &self.twitter_title,
      Field::TwitterDescription => &self.twitter_description,
      Field::TwitterImage => &self.twitter_image,
      Field::TwitterPlayer => &self.twitter_player,
      Field::TwitterPlayerWidth => &self.twitter_player_width,
      Field::TwitterPlayerHeight => &self.twitter_player_height,
    }
  }

  pub fn get_mut(&mut self, field: Field) -> &mut String {
    match field {
      Field::Title => &mut self.title,
      Field::Description => &mut self.description,
      Field::Author => &mut self.author,
      Field::OgTitle => &mut self.og_title,
      Field::OgDescription => &mut self.og_description,
      Field::OgImage => &mut self.og_image,
      Field::OgSiteName => &mut self.og_site_name,
      Field::OgPublisher => &mut self.og_publisher,
      Field::OgAuthor => &mut self.og_author,
      Field::TwitterCard => &mut self.twitter_card,
      Field::TwitterTitle => &mut self.twitter_title,
      Field::TwitterDescription => &mut self.twitter_description,
      Field::TwitterImage => &mut self.twitter_image,
      Field::TwitterPlayer => &mut self.twitter_player,
      Field::TwitterPlayerWidth => &mut self.twitter_player_width,
      Field::TwitterPlayerHeight => &mut self.twitter_player_height,
    }
  }

  /// Whether no field was populated.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.iter().all(|(_, value)| value.is_empty())
  }

  /// Fields in declaration order, paired with their current value.
  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
    Field::ALL.into_iter().map(|field| (field, self.get(field)))
  }
}

/// One slot of [`Tags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  Title,
  Description,
  Author,
  OgTitle,
  OgDescription,
  OgImage,
  OgSiteName,
  OgPublisher,
  OgAuthor,
  TwitterCard,
  TwitterTitle,
  TwitterDescription,
  TwitterImage,
  TwitterPlayer,
  TwitterPlayerWidth,
  TwitterPlayerHeight,
}

impl Field {
  pub const ALL: [Field; 16] = [
    Field::Title,
    Field::Description,
    Field::Author,
    Field::OgTitle,
    Field::OgDescription,
    Field::OgImage,
    Field::OgSiteName,
    Field::OgPublisher,
    Field::OgAuthor,
    Field::TwitterCard,
    Field::TwitterTitle,
    Field::TwitterDescription,
    Field::TwitterImage,
    Field::TwitterPlayer,
    Field::TwitterPlayerWidth,
    Field::TwitterPlayerHeight,
  ];

  /// The name the field is serialized under.
  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Field::Title => "title",
      Field::Description => "description",
      Field::Author => "author",
      Field::OgTitle => "og_title",
      Field::OgDescription => "og_description",
      Field::OgImage => "og_image",
      Field::OgSiteName => "og_site_name",
      Field::OgPublisher => "og_publisher",
      Field::OgAuthor => "og_author",
      Field::TwitterCard => "twitter_card",
      Field::TwitterTitle => "twitter_title",
      Field::TwitterDescription => "twitter_description",
      Field::TwitterImage => "twitter_image",
      Field::TwitterPlayer => "twitter_player",
      Field::TwitterPlayerWidth => "twitter_player_width",
      Field::TwitterPlayerHeight => "twitter_player_height",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
