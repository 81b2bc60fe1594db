/// Cap `value` at `max_len` bytes without splitting a UTF-8 sequence.
///
/// The cut lands on the last character boundary at or before `max_len`, so
/// the result may be shorter than `max_len`, and is empty if the first
/// character alone is longer than the cap.
#[must_use]
pub fn truncate(value: &str, max_len: usize) -> &str {
  if value.len() <= max_len {
    return value;
  }

  let end = (0..=max_len)
    .rev()
    .find(|&index| value.is_char_boundary(index))
    .unwrap_or(0);

  &value[..end]
}
