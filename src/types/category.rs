//! Browse categories

use serde::{Deserialize, Serialize};

/// Category name used for ids outside the fixed table
pub const OTHER_CATEGORY: &str = "其他";

/// (id, name, icon, description) for each browse category
pub const CATEGORY_TABLE: &[(&str, &str, &str, &str)] = &[
    ("1", "解表药", "🌡️", "麻黄、桂枝..."),
    ("2", "清热药", "🔥", "石膏、知母..."),
    ("3", "补虚药", "💊", "人参、黄芪..."),
    ("4", "理气药", "🌿", "陈皮、枳实..."),
    ("5", "活血化瘀药", "💉", "川芎、红花..."),
    ("6", "安神药", "😴", "酸枣仁、柏子仁..."),
];

/// A browse category with the number of herbs filed under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HerbCategory {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub herb_count: usize,
}

/// Resolve a category id to the category name herbs are stored under
pub fn category_name_for_id(id: &str) -> &'static str {
    CATEGORY_TABLE
        .iter()
        .find(|(cid, ..)| *cid == id)
        .map(|(_, name, ..)| *name)
        .unwrap_or(OTHER_CATEGORY)
}

/// Build the fixed categories, counting herbs with `count_for(name)`
pub fn default_categories<F>(count_for: F) -> Vec<HerbCategory>
where
    F: Fn(&str) -> usize,
{
    CATEGORY_TABLE
        .iter()
        .map(|(id, name, icon, description)| HerbCategory {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            herb_count: count_for(name),
        })
        .collect()
}
