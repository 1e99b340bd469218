//! Integration tests for the HerbMind store, search and daily picks

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use tempfile::TempDir;

use herb_mind::store::{HerbStore, RECENT_SEARCH_LIMIT};
use herb_mind::types::{Herb, RecommendType};
use herb_mind::HerbError;

fn herb(id: &str, name: &str, category: &str, effects: &[&str]) -> Herb {
    Herb::with_effects(
        id,
        name,
        category,
        effects.iter().map(|e| e.to_string()).collect(),
    )
}

fn catalog() -> Vec<Herb> {
    let mut danshen = herb("danshen", "丹参", "活血化瘀药", &["活血化瘀", "凉血消痈"]);
    danshen.is_common = true;
    danshen.exam_frequency = 5;
    danshen.similar_to = vec!["chuanxiong".into()];

    let mut chuanxiong = herb("chuanxiong", "川芎", "活血化瘀药", &["活血行气", "祛风止痛"]);
    chuanxiong.similar_to = vec!["danshen".into()];

    let mut mahuang = herb("mahuang", "麻黄", "解表药", &["发汗解表", "宣肺平喘"]);
    mahuang.pinyin = "Mahuang".into();

    vec![
        danshen,
        chuanxiong,
        mahuang,
        herb("suanzaoren", "酸枣仁", "安神药", &["养心安神", "敛汗"]),
        herb("huangqi", "黄芪", "补虚药", &["补气升阳", "益卫固表"]),
    ]
}

fn write_catalog(dir: &TempDir, herbs: &[Herb]) -> PathBuf {
    let path = dir.path().join("herbs.jsonl");
    let lines: Vec<String> = herbs
        .iter()
        .map(|h| serde_json::to_string(h).unwrap())
        .collect();
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn open_store() -> (HerbStore, TempDir) {
    let dir = TempDir::new().unwrap();
    let data = write_catalog(&dir, &catalog());
    let store = HerbStore::with_paths(&data, dir.path().join("state.jsonl")).unwrap();
    (store, dir)
}

fn reopen(dir: &TempDir) -> HerbStore {
    HerbStore::with_paths(dir.path().join("herbs.jsonl"), dir.path().join("state.jsonl")).unwrap()
}

#[test]
fn test_load_catalog_from_jsonl() {
    let (store, _dir) = open_store();

    assert_eq!(store.herb_count(), 5);
    assert_eq!(store.get_herb_by_id("mahuang").unwrap().name, "麻黄");
    assert!(store.get_herb_by_id("missing").is_none());
    assert_eq!(store.get_herbs_by_category("活血化瘀药").len(), 2);
}

#[test]
fn test_load_skips_malformed_lines() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("herbs.jsonl");
    let good = serde_json::to_string(&herb("danshen", "丹参", "活血化瘀药", &["活血化瘀"])).unwrap();
    let duplicate = serde_json::to_string(&herb("danshen", "重复", "活血化瘀药", &[])).unwrap();
    fs::write(
        &data,
        format!("{good}\nnot json\n\n{{\"id\":\"\",\"name\":\"无名\"}}\n{duplicate}\n"),
    )
    .unwrap();

    let store = HerbStore::with_paths(&data, dir.path().join("state.jsonl")).unwrap();
    assert_eq!(store.herb_count(), 1);
    assert_eq!(store.get_herb_by_id("danshen").unwrap().name, "丹参");
}

#[test]
fn test_missing_files_open_empty() {
    let dir = TempDir::new().unwrap();
    let store =
        HerbStore::with_paths(dir.path().join("none.jsonl"), dir.path().join("state.jsonl")).unwrap();

    assert_eq!(store.herb_count(), 0);
    assert!(store.search("活血").is_empty());
    assert!(store.daily_recommend(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()).is_empty());
}

#[test]
fn test_import_persists_across_reopen() {
    let (store, dir) = open_store();

    let imported = store
        .import_herbs(vec![
            herb("gancao", "甘草", "补虚药", &["补脾益气", "调和诸药"]),
            herb("mahuang", "炙麻黄", "解表药", &["发汗解表"]),
        ])
        .unwrap();
    assert_eq!(imported, 2);
    drop(store);

    let store = reopen(&dir);
    assert_eq!(store.herb_count(), 6);
    assert_eq!(store.get_herb_by_id("mahuang").unwrap().name, "炙麻黄");
    assert!(store.get_herb_by_id("gancao").is_some());
}

#[test]
fn test_import_rejects_invalid_herb() {
    let (store, _dir) = open_store();
    let mut bad = herb("bad", "坏", "其他", &[]);
    bad.exam_frequency = 9;

    let err = store.import_herbs(vec![bad]).unwrap_err();
    assert!(matches!(err, HerbError::InvalidHerb(_)));
    assert_eq!(store.herb_count(), 5);
}

#[test]
fn test_search_ranks_and_clamps() {
    let (store, _dir) = open_store();

    let results = store.search("活血");
    let ids: Vec<&str> = results.iter().map(|r| r.herb.id.as_str()).collect();
    assert_eq!(ids[0], "danshen");
    assert!(ids.contains(&"chuanxiong"));
    assert!(results.iter().all(|r| r.score > 0 && r.score <= 100));
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_search_blank_query_is_empty() {
    let (store, _dir) = open_store();
    assert!(store.search("").is_empty());
    assert!(store.search("   ").is_empty());
}

#[test]
fn test_search_by_pinyin_ignores_case() {
    let (store, _dir) = open_store();
    let results = store.search("mahuang");
    assert_eq!(results[0].herb.id, "mahuang");
}

#[test]
fn test_search_expands_synonyms() {
    let (store, _dir) = open_store();
    // "安眠" only reaches the herb through its synonym group
    let results = store.search("安眠");
    assert!(results.iter().any(|r| r.herb.id == "suanzaoren"));
}

#[test]
fn test_daily_is_deterministic() {
    let (store, _dir) = open_store();
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    let first = store.daily_recommend(date);
    let second = store.daily_recommend(date);
    let first_ids: Vec<&str> = first.iter().map(|r| r.herb.id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|r| r.herb.id.as_str()).collect();
    assert_eq!(first_ids, second_ids);

    let types: Vec<RecommendType> = first.iter().map(|r| r.recommend_type).collect();
    assert!(types.contains(&RecommendType::Exam));
    assert!(types.contains(&RecommendType::Contrast));
    assert!(first.len() <= 3);
}

#[test]
fn test_favorites_persist_newest_first() {
    let (store, dir) = open_store();

    store.add_favorite("danshen").unwrap();
    store.add_favorite("mahuang").unwrap();
    store.add_favorite("danshen").unwrap();
    drop(store);

    let store = reopen(&dir);
    let ids: Vec<String> = store.get_favorites().into_iter().map(|h| h.id).collect();
    assert_eq!(ids, vec!["mahuang".to_string(), "danshen".to_string()]);

    assert!(!store.toggle_favorite("mahuang").unwrap());
    assert!(!store.is_favorite("mahuang"));
    assert!(store.add_favorite("missing").unwrap_err().is_not_found());
}

#[test]
fn test_history_persists_and_limits() {
    let (store, dir) = open_store();

    for i in 0..15 {
        store.add_search(&format!("查询{i}")).unwrap();
    }
    store.add_search("查询3").unwrap();
    store.add_search("  ").unwrap();
    drop(store);

    let store = reopen(&dir);
    let recent = store.recent_searches();
    assert_eq!(recent.len(), RECENT_SEARCH_LIMIT);
    assert_eq!(recent[0], "查询3");
    assert_eq!(recent[1], "查询14");

    store.delete_search("查询3").unwrap();
    assert_eq!(store.recent_searches()[0], "查询14");

    store.clear_history().unwrap();
    drop(store);
    assert!(reopen(&dir).recent_searches().is_empty());
}

#[test]
fn test_concurrent_reads_and_writes() {
    let (store, _dir) = open_store();
    let store = Arc::new(store);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for j in 0..10 {
                    store.add_search(&format!("t{i}-{j}")).unwrap();
                    assert!(!store.search("活血").is_empty());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.recent_searches().len(), RECENT_SEARCH_LIMIT);
}

#[test]
fn test_failed_state_write_is_not_applied() {
    let (store, dir) = open_store();
    let state_path = dir.path().join("state.jsonl");
    fs::create_dir_all(state_path.join("blocker")).unwrap();

    assert!(store.add_favorite("danshen").is_err());
    assert!(store.add_search("活血").is_err());
    assert!(store.get_favorites().is_empty());
    assert!(store.recent_searches().is_empty());

    fs::remove_dir_all(&state_path).unwrap();
    store.add_favorite("mahuang").unwrap();
    drop(store);

    let store = reopen(&dir);
    let ids: Vec<String> = store.get_favorites().into_iter().map(|h| h.id).collect();
    assert_eq!(ids, vec!["mahuang".to_string()]);
    assert!(store.recent_searches().is_empty());
}
