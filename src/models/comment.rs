// src/models/comment.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub campsite_id: u32,   // Campsite the comment belongs to
    pub rating: u8,         // 1 to 5
    pub text: String,
    pub author: String,
    pub date: String,       // ISO-8601 timestamp
}

/// Payload emitted by the comment form on a successful submit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub campsite_id: u32,
    pub rating: String,     // One of the form's rating options, "1" to "5"
    pub author: String,
    pub text: String,
}
