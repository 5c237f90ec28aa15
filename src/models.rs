//! Frontend Models
//!
//! Data structures matching the remote todo resource.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    /// The server nulls this on a PUT that omits it
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Server-assigned, local time without zone
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body for `POST /todos`
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
}

/// Partial todo for `PUT /todos/{id}`; absent fields are left to the server
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Paginated result envelope (Spring Data `Page` JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(rename = "number")]
    pub page_number: u32,
    #[serde(rename = "size")]
    pub page_size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(rename = "first", default)]
    pub is_first: bool,
    #[serde(rename = "last", default)]
    pub is_last: bool,
}

impl<T> Page<T> {
    /// Whether the envelope respects its own bounds.
    ///
    /// `content` never exceeds `page_size` and `page_number` lies in
    /// `[0, max(total_pages, 1))`.
    pub fn is_consistent(&self) -> bool {
        self.content.len() <= self.page_size as usize
            && self.page_number < self.total_pages.max(1)
    }

    /// Page count as the client tracks it: never below one
    pub fn client_total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }
}
