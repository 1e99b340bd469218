//! Herb record type

use serde::{Deserialize, Serialize};

use super::{default_exam_frequency, is_false};

/// Highest exam frequency a herb can carry
pub const MAX_EXAM_FREQUENCY: u8 = 5;

/// A single herb with its clinical and mnemonic metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Herb {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub pinyin: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    #[serde(default)]
    pub flavor: Vec<String>,
    #[serde(default)]
    pub meridians: Vec<String>,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub indications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_tip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_point: Option<String>,
    #[serde(default)]
    pub similar_to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_common: bool,
    #[serde(default = "default_exam_frequency")]
    pub exam_frequency: u8,
}

impl Herb {
    /// Create a herb with only its identity and category filled in
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pinyin: String::new(),
            aliases: Vec::new(),
            category: category.into(),
            sub_category: None,
            nature: None,
            flavor: Vec::new(),
            meridians: Vec::new(),
            effects: Vec::new(),
            indications: Vec::new(),
            usage: None,
            contraindications: Vec::new(),
            memory_tip: None,
            association: None,
            key_point: None,
            similar_to: Vec::new(),
            image: None,
            is_common: false,
            exam_frequency: default_exam_frequency(),
        }
    }

    /// Create a herb with effects
    pub fn with_effects(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        effects: Vec<String>,
    ) -> Self {
        Self {
            effects,
            ..Self::new(id, name, category)
        }
    }

    /// Check the fields every persisted herb must carry
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("herb id must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err(format!("herb '{}' has an empty name", self.id));
        }
        if !(1..=MAX_EXAM_FREQUENCY).contains(&self.exam_frequency) {
            return Err(format!(
                "herb '{}' has exam frequency {} outside 1..={}",
                self.id, self.exam_frequency, MAX_EXAM_FREQUENCY
            ));
        }
        Ok(())
    }
}
