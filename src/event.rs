use super::*;

const BODY: &[u8] = b"body";
const META: &[u8] = b"meta";
const TITLE: &[u8] = b"title";

/// What the scan needs to know about one tokenizer event.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Event {
  Body,
  Title,
  /// A `<meta>` start tag, its attributes folded in source order.
  Meta(MetaTag),
  Text(Vec<u8>),
  /// Any other tag, comment or doctype.
  Markup,
}

/// Turns the tokenizer's callback events into [`Event`]s.
///
/// Attributes are only buffered for `<meta>` tags. They are kept in the
/// order they appear, duplicates included, and folded when the tag closes.
#[derive(Debug, Default)]
pub(crate) struct Events {
  attributes: Vec<(Vec<u8>, Vec<u8>)>,
  tag: Vec<u8>,
}

impl Events {
  pub(crate) fn handle(&mut self, event: CallbackEvent<'_>) -> Option<Event> {
    match event {
      CallbackEvent::OpenStartTag { name } => {
        self.tag.clear();
        self.tag.extend_from_slice(name);
        self.attributes.clear();
        None
      }
      CallbackEvent::AttributeName { name } => {
        if self.tag == META {
          self.attributes.push((name.to_vec(), Vec::new()));
        }
        None
      }
      CallbackEvent::AttributeValue { value } => {
        if self.tag == META {
          if let Some((_, current)) = self.attributes.last_mut() {
            current.extend_from_slice(value);
          }
        }
        None
      }
      CallbackEvent::CloseStartTag { .. } => Some(self.close_start_tag()),
      CallbackEvent::String { value } => Some(Event::Text(value.to_vec())),
      CallbackEvent::Error(_) => None,
      _ => Some(Event::Markup),
    }
  }

  fn close_start_tag(&mut self) -> Event {
    let event = match self.tag.as_slice() {
      BODY => Event::Body,
      TITLE => Event::Title,
      META => Event::Meta(MetaTag::from_attributes(
        self
          .attributes
          .drain(..)
          .map(|(key, value)| (lossy(&key), lossy(&value))),
      )),
      _ => Event::Markup,
    };

    self.tag.clear();

    event
  }
}

pub(crate) fn lossy(bytes: &[u8]) -> String {
  String::from_utf8_lossy(bytes).into_owned()
}
