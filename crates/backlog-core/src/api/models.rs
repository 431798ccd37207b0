use chrono::{DateTime, Utc};
use crate::utils::nullable::null_as_default;
use serde::{Deserialize, Serialize};

// Activity models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub project: Option<Project>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub activity_type: i64,
    pub content: Option<ActivityContent>,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
    pub created_user: Option<User>,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ActivityContent {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub key_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub comment: Option<Comment>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    pub created_user: Option<User>,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeLog {
    #[serde(deserialize_with = "null_as_default")]
    pub field: String,
    pub new_value: Option<String>,
    pub original_value: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub content: Option<String>,
    #[serde(rename = "changeLog", deserialize_with = "null_as_default")]
    pub change_logs: Vec<ChangeLog>,
    pub created_user: Option<User>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: Vec<Star>,
    #[serde(deserialize_with = "null_as_default")]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub already_read: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_already_read: bool,
    pub user: Option<User>,
    pub created: Option<DateTime<Utc>>,
}

// Project models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub project_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub chart_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub subtasking_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub project_leader_can_edit_project_leader: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub text_formatting_rule: String,
    #[serde(deserialize_with = "null_as_default")]
    pub archived: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Star {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub comment: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub presenter: Option<User>,
    pub created: Option<DateTime<Utc>>,
}

// User models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    pub user_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role_type: i64,
    pub lang: Option<String>,
    pub mail_address: Option<String>,
    pub nulab_account: Option<NulabAccount>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NulabAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub nulab_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unique_id: String,
}

// Wiki models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Wiki {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub content: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    #[serde(deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(deserialize_with = "null_as_default")]
    pub shared_files: Vec<SharedFile>,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: Vec<Star>,
    pub created_user: Option<User>,
    pub created: Option<DateTime<Utc>>,
    pub updated_user: Option<User>,
    pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SharedFile {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub file_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dir: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    pub created_user: Option<User>,
    pub created: Option<DateTime<Utc>>,
    pub updated_user: Option<User>,
    pub updated: Option<DateTime<Utc>>,
}

/// Body of `GET wikis/count`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WikiCount {
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
}
