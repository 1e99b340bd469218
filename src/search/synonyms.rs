//! Synonym dictionary for herb effect search

/// Synonym groups - words in same group are treated as one concept when matching.
/// The first word of each group is its canonical name.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &["活血", "化瘀", "散瘀", "祛瘀", "逐瘀"],
    &["止痛", "镇痛", "缓解疼痛", "止疼"],
    &["补气", "益气", "补虚", "培元"],
    &["安神", "镇静", "安眠", "定志", "助眠"],
    &["清热", "泻火", "凉血", "清火"],
    &["解毒", "排毒", "消炎", "解热毒"],
    &["健脾", "补脾", "醒脾", "运脾"],
    &["润肺", "养肺", "滋阴润肺"],
    &["疏肝", "养肝", "柔肝", "平肝"],
    &["温阳", "补阳", "壮阳", "助阳"],
    &["补血", "养血", "生血"],
    &["滋阴", "养阴", "益阴", "补阴"],
    &["利水", "渗湿", "利尿", "消肿"],
    &["止咳", "化痰", "平喘", "润肺止咳"],
    &["消食", "健胃", "开胃", "助消化"],
];

/// Find the group a keyword belongs to (exact membership, first group wins)
pub fn find_group(keyword: &str) -> Option<&'static [&'static str]> {
    SYNONYM_GROUPS
        .iter()
        .copied()
        .find(|group| group.contains(&keyword))
}

/// Expand a keyword to every term considered equivalent to it.
///
/// Returns the whole group in table order when the keyword belongs to one,
/// otherwise just the keyword.
pub fn expand_synonyms(keyword: &str) -> Vec<String> {
    match find_group(keyword) {
        Some(group) => group.iter().map(|word| word.to_string()).collect(),
        None => vec![keyword.to_string()],
    }
}

/// Check whether a keyword has any synonyms beyond itself
pub fn has_synonyms(keyword: &str) -> bool {
    find_group(keyword).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_canonical_term() {
        let synonyms = expand_synonyms("活血");
        assert_eq!(synonyms, vec!["活血", "化瘀", "散瘀", "祛瘀", "逐瘀"]);
    }

    #[test]
    fn test_expand_member_returns_whole_group() {
        let synonyms = expand_synonyms("镇静");
        assert_eq!(synonyms[0], "安神");
        assert!(synonyms.contains(&"助眠".to_string()));
        assert_eq!(synonyms.len(), 5);
    }

    #[test]
    fn test_membership_is_exact() {
        // "润肺止咳" lives in the 止咳 group even though it contains 润肺
        assert_eq!(expand_synonyms("润肺止咳")[0], "止咳");
        // A fragment of a synonym is not a member
        assert_eq!(expand_synonyms("瘀"), vec!["瘀"]);
    }

    #[test]
    fn test_unknown_keyword_is_singleton() {
        assert_eq!(expand_synonyms("人参"), vec!["人参"]);
        assert!(!has_synonyms("人参"));
        assert!(has_synonyms("开胃"));
    }
}
