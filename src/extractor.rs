use super::*;

// Extra raw bytes kept past the cap while a title is being collected, so the
// character straddling the cap is complete when it is decoded.
const TITLE_SLACK: usize = 4;

/// Streams a document through the tokenizer and fills in [`Tags`].
///
/// An extractor holds only its options; every call to [`run`](Self::run)
/// starts from an empty record, so one extractor can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
  options: ExtractorOptions,
}

impl Extractor {
  #[must_use]
  pub fn new(options: ExtractorOptions) -> Self {
    Self { options }
  }

  pub fn extract<R: Read>(&self, reader: R) -> Tags {
    self.run(reader).tags
  }

  #[must_use]
  pub fn extract_str(&self, html: &str) -> Tags {
    self.extract(html.as_bytes())
  }

  /// Scan `reader` up to the first `<body>` tag or the end of input.
  ///
  /// Never fails. A reader error ends the scan early and is reported through
  /// [`Extraction::stop`] alongside whatever was gathered before it.
  pub fn run<R: Read>(&self, reader: R) -> Extraction {
    let mut emitter = CallbackEmitter::new({
      let mut events = Events::default();
      move |event: CallbackEvent<'_>| events.handle(event)
    });

    emitter.naively_switch_states(true);

    let mut events =
      Tokenizer::new_with_emitter(IoReader::new(reader), emitter);

    let mut scan = Scan::new(self.options.max_field_length);

    let stop = loop {
      match events.next() {
        None => break StopReason::EndOfStream,
        Some(Err(error)) => break StopReason::ReadFailed(Error::from(error)),
        Some(Ok(event)) => {
          if let ControlFlow::Break(reason) = scan.event(event) {
            break reason;
          }
        }
      }
    };

    let tags = scan.finish();

    debug!(
      %stop,
      populated = tags.iter().filter(|(_, value)| !value.is_empty()).count(),
      "metadata scan finished"
    );

    Extraction { tags, stop }
  }
}

#[derive(Debug)]
enum State {
  Scanning,
  /// A `<title>` start tag was seen; the next text run is the title.
  TitlePending,
  /// Raw bytes of the title text run seen so far.
  Title(Vec<u8>),
}

struct Scan {
  max_field_length: Option<usize>,
  state: State,
  tags: Tags,
}

impl Scan {
  fn new(max_field_length: Option<usize>) -> Self {
    Self {
      max_field_length,
      state: State::Scanning,
      tags: Tags::default(),
    }
  }

  fn finish(mut self) -> Tags {
    self.close_title();
    self.tags
  }

  fn event(&mut self, event: Event) -> ControlFlow<StopReason> {
    // The tokenizer may split one text run into several string events, so a
    // title is only complete once something other than text arrives.
    if let Event::Text(text) = &event {
      self.text(text);
      return ControlFlow::Continue(());
    }

    self.close_title();

    match event {
      Event::Body => return ControlFlow::Break(StopReason::Body),
      Event::Title => self.state = State::TitlePending,
      Event::Meta(meta) => self.meta(&meta),
      Event::Text(_) | Event::Markup => {}
    }

    ControlFlow::Continue(())
  }

  fn text(&mut self, text: &[u8]) {
    if matches!(self.state, State::TitlePending) {
      self.state = State::Title(Vec::new());
    }

    let State::Title(buffer) = &mut self.state else {
      return;
    };

    let take = self.max_field_length.map_or(text.len(), |max| {
      max
        .saturating_add(TITLE_SLACK)
        .saturating_sub(buffer.len())
        .min(text.len())
    });

    buffer.extend_from_slice(&text[..take]);
  }

  fn close_title(&mut self) {
    if let State::Title(buffer) = &mut self.state {
      let title = lossy(&mem::take(buffer));
      self.state = State::Scanning;
      self.set(Field::Title, &title);
    }
  }

  fn meta(&mut self, meta: &MetaTag) {
    for property in meta.properties() {
      trace!(%property, content = meta.content(), "matched meta property");

      self.set(property.target(), meta.content());

      if let Some(fallback) = property.fallback() {
        if self.tags.get(fallback).is_empty() {
          self.set(fallback, meta.content());
        }
      }
    }
  }

  fn set(&mut self, field: Field, value: &str) {
    let value = match self.max_field_length {
      Some(max) => truncate(value, max),
      None => value,
    };

    *self.tags.get_mut(field) = value.to_string();
  }
}
