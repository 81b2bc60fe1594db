use {
  meta_extractor::{
    DEFAULT_MAX_FIELD_LENGTH, Extractor, ExtractorOptions, StopReason, Tags,
    extract,
  },
  pretty_assertions::assert_eq,
  std::io::{self, Read},
};

/// Hands out at most `chunk` bytes per read.
struct Chunked<'a> {
  chunk: usize,
  data: &'a [u8],
}

impl Read for Chunked<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.chunk.min(buf.len()).min(self.data.len());
    buf[..n].copy_from_slice(&self.data[..n]);
    self.data = &self.data[n..];
    Ok(n)
  }
}

/// Yields `data`, then fails every read.
struct Failing<'a> {
  data: &'a [u8],
}

impl Read for Failing<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    if self.data.is_empty() {
      return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
    }

    let n = buf.len().min(self.data.len());
    buf[..n].copy_from_slice(&self.data[..n]);
    self.data = &self.data[n..];
    Ok(n)
  }
}

const DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Café — Ünïcödé 🎉</title>
  <meta name="description" content="A place with ñ and 👨‍💻">
  <meta property="og:image" content="https://example.com/a.png">
  <meta name="twitter:card" content="summary_large_image">
</head>
<body><p>Hello</p></body>
</html>"#;

fn scan_bytes(html: &[u8]) -> Tags {
  extract(html)
}

#[test]
fn byte_at_a_time_reader_matches_single_read() {
  let whole = extract(DOCUMENT.as_bytes());

  for chunk in [1, 2, 3, 7, 64] {
    let chunked = extract(Chunked {
      chunk,
      data: DOCUMENT.as_bytes(),
    });

    assert_eq!(chunked, whole, "chunk size {chunk}");
  }

  assert_eq!(whole.title, "Café — Ünïcödé 🎉");
  assert_eq!(whole.description, "A place with ñ and 👨‍💻");
  assert_eq!(whole.twitter_card, "summary_large_image");
}

#[test]
fn read_failure_keeps_partial_tags() {
  let html = br#"<head><meta name="author" content="before"><title>Unfinished"#;

  let extraction = Extractor::default().run(Failing { data: html });

  assert!(matches!(extraction.stop, StopReason::ReadFailed(_)));
  assert!(!extraction.stop.is_complete());
  assert_eq!(extraction.tags.author, "before");
}

#[test]
fn immediately_failing_reader_yields_empty_tags() {
  let extraction = Extractor::default().run(Failing { data: b"" });

  assert!(matches!(extraction.stop, StopReason::ReadFailed(_)));
  assert!(extraction.tags.is_empty());
}

#[test]
fn truncated_documents() {
  assert_eq!(
    scan_bytes(b"<html><head><title>Unclosed title").title,
    "Unclosed title"
  );

  assert_eq!(
    scan_bytes(br#"<meta name="description" content="Unclosed meta"#)
      .description,
    ""
  );

  scan_bytes(
    br#"<html><head><title></title><meta property="og:title" content="></head></html>"#,
  );
}

#[test]
fn garbage_markup() {
  for html in [
    "<><><><>",
    "<<>><<>>",
    "</>",
    "<!",
    "<!--",
    "<meta",
    "<meta name=",
    "&#xFFFFFFFF;&#0;&",
    "<html><head><title>Test</title><meta></head></html>",
  ] {
    scan_bytes(html.as_bytes());
  }
}

#[test]
fn invalid_utf8_is_replaced() {
  let tags = scan_bytes(
    b"<title>bad \xff\xfe bytes</title><meta name=\"author\" content=\"\xc3\">",
  );

  assert_eq!(tags.title, "bad \u{FFFD}\u{FFFD} bytes");
  assert_eq!(tags.author, "\u{FFFD}");
}

#[test]
fn oversized_values_are_capped() {
  let huge = "B".repeat(DEFAULT_MAX_FIELD_LENGTH * 50);

  let html = format!(
    r#"<title>{huge}</title><meta name="description" content="{huge}">"#
  );

  let tags = extract(html.as_bytes());

  assert_eq!(tags.title.len(), DEFAULT_MAX_FIELD_LENGTH);
  assert_eq!(tags.description.len(), DEFAULT_MAX_FIELD_LENGTH);
}

#[test]
fn capped_title_never_splits_characters() {
  let extractor = Extractor::new(
    ExtractorOptions::builder().max_field_length(Some(5)).build(),
  );

  let tags = extractor.extract(Chunked {
    chunk: 1,
    data: "<title>ab🎉cd</title>".as_bytes(),
  });

  assert_eq!(tags.title, "ab");
}

#[test]
fn deeply_nested_and_repeated_tags() {
  let html = format!(
    "<html>{}<title>Deep</title>{}</html>{}",
    "<head>".repeat(500),
    "</head>".repeat(500),
    r#"<meta name="test" content="loop"/>"#.repeat(1000),
  );

  assert_eq!(extract(html.as_bytes()).title, "Deep");
}

#[test]
fn nested_titles() {
  let tags = scan_bytes(
    b"<html><head><title><title><title>Nested titles</title></title></title></head></html>",
  );

  assert_eq!(tags.title, "<title><title>Nested titles");
}

#[test]
fn nested_markup_in_title_is_text() {
  let tags = scan_bytes(
    b"<html><head><title><span>Nested</span> Title</title></head></html>",
  );

  assert_eq!(tags.title, "<span>Nested</span> Title");
}

#[test]
fn nested_meta() {
  let tags = scan_bytes(
    br#"<html><head><meta><meta property="og:title" content="Nested meta"/></meta></head></html>"#,
  );

  assert_eq!(tags.og_title, "Nested meta");
  assert_eq!(tags.title, "Nested meta");
}

#[test]
fn injection_payloads_are_plain_strings() {
  let tags = scan_bytes(
    br#"<title>'; DROP TABLE users; --</title>
        <meta property="og:title" content="javascript:alert(1)"/>
        <meta name="author" content="<img src=x onerror=alert(1)>"/>"#,
  );

  assert_eq!(tags.title, "'; DROP TABLE users; --");
  assert_eq!(tags.og_title, "javascript:alert(1)");
  assert_eq!(tags.author, "<img src=x onerror=alert(1)>");
}

#[test]
fn parse_diagnostics_inside_title_do_not_cut_it() {
  let tags = scan_bytes(b"<title>before\0after</title>");

  assert_eq!(tags.title, "before\u{FFFD}after");
}
