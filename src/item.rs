use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Item {
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) author: String,
  #[serde(
    default,
    deserialize_with = "deserialize_null_default",
    rename = "num_comments"
  )]
  pub(crate) comments: u64,
  #[serde(rename = "objectID")]
  pub(crate) id: String,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) points: i64,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) title: String,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) url: String,
}

impl Item {
  pub(crate) fn matches_filter(&self, filter: &str) -> bool {
    filter.is_empty()
      || self.title.to_lowercase().contains(&filter.to_lowercase())
  }

  pub(crate) fn resolved_url(&self) -> String {
    if self.url.is_empty() {
      format!("https://news.ycombinator.com/item?id={}", self.id)
    } else {
      self.url.clone()
    }
  }
}

#[cfg(test)]
pub(crate) fn sample_item(id: &str, title: &str) -> Item {
  Item {
    author: format!("author{id}"),
    comments: 0,
    id: id.to_string(),
    points: 0,
    title: title.to_string(),
    url: format!("https://example.com/{id}"),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_algolia_hit() {
    let item = serde_json::from_str::<Item>(
      r#"{
        "objectID": "8863",
        "title": "My YC app: Dropbox",
        "author": "dhouston",
        "url": "http://www.getdropbox.com/u/2/screencast.html",
        "num_comments": 71,
        "points": 104,
        "created_at": "2007-04-04T19:16:40.000Z"
      }"#,
    )
    .unwrap();

    assert_eq!(item.id, "8863");
    assert_eq!(item.title, "My YC app: Dropbox");
    assert_eq!(item.author, "dhouston");
    assert_eq!(item.comments, 71);
    assert_eq!(item.points, 104);
  }

  #[test]
  fn null_and_missing_fields_default() {
    let item = serde_json::from_str::<Item>(
      r#"{"objectID": "1", "title": null, "url": null, "points": null}"#,
    )
    .unwrap();

    assert_eq!(item.title, "");
    assert_eq!(item.author, "");
    assert_eq!(item.url, "");
    assert_eq!(item.comments, 0);
    assert_eq!(item.points, 0);
  }

  #[test]
  fn missing_object_id_is_rejected() {
    assert!(serde_json::from_str::<Item>(r#"{"title": "no id"}"#).is_err());
  }

  #[test]
  fn filter_is_case_insensitive_substring() {
    let item = sample_item("1", "Redux Basics");

    assert!(item.matches_filter(""));
    assert!(item.matches_filter("redux"));
    assert!(item.matches_filter("X BAS"));
    assert!(!item.matches_filter("flux"));
  }

  #[test]
  fn resolved_url_falls_back_to_item_page() {
    let mut item = sample_item("42", "Example");
    assert_eq!(item.resolved_url(), "https://example.com/42");

    item.url.clear();
    assert_eq!(
      item.resolved_url(),
      "https://news.ycombinator.com/item?id=42"
    );
  }
}
