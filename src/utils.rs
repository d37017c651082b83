use super::*;

/// Decodes `null` the same as a missing field: as the type's default.
pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn format_count(count: usize, singular: &str) -> String {
  match count {
    1 => format!("1 {singular}"),
    _ => format!("{count} {singular}s"),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Deserialize, Debug, PartialEq)]
  struct Wrapper {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    count: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    name: String,
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn truncate_preserves_exact_length_strings() {
    assert_eq!(truncate("exact", 5), "exact");
  }

  #[test]
  fn truncate_counts_characters_not_bytes() {
    assert_eq!(truncate("héllo wörld", 5), "héllo...");
  }

  #[test]
  fn format_count_handles_singular_and_plural() {
    assert_eq!(format_count(1, "result"), "1 result");
    assert_eq!(format_count(0, "result"), "0 results");
    assert_eq!(format_count(7, "result"), "7 results");
  }

  #[test]
  fn deserialize_null_default_treats_null_as_missing() {
    assert_eq!(
      serde_json::from_str::<Wrapper>(r#"{"count": null, "name": null}"#)
        .unwrap(),
      Wrapper {
        count: 0,
        name: String::new(),
      }
    );

    assert_eq!(
      serde_json::from_str::<Wrapper>(r#"{"count": 4, "name": "pg"}"#)
        .unwrap(),
      Wrapper {
        count: 4,
        name: "pg".into(),
      }
    );

    assert!(serde_json::from_str::<Wrapper>(r#"{"count": "four"}"#).is_err());
  }
}
