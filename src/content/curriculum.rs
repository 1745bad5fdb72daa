use serde::{Deserialize, Serialize};

fn active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(rename = "_id")]
    pub id: String,
    pub grade_number: u32,
    pub grade_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "_id")]
    pub id: String,
    pub grade_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    /// relative order within the grade
    pub order: i32,
    #[serde(default = "active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "_id")]
    pub id: String,
    pub topic_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// relative order within the topic
    pub order: i32,
    #[serde(default = "active")]
    pub is_active: bool,
    /// set by the backend once the module has content to show, modules
    /// without it are listed as "coming soon"
    #[serde(default)]
    pub content_available: bool,
}
