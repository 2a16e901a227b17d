//! Integration tests for feedtags
//!
//! These tests open real sled stores in temporary directories and drive the
//! tag filter controller through complete workflows.

use chrono::{TimeDelta, Utc};
use feedtags::categories::{TagCatalog, TagCategory};
use feedtags::filter::{FilterMode, TagSelectionController, UnblockOutcome, UnblockPolicy};
use feedtags::flags::{AuthState, FeatureFlags};
use feedtags::preferences::{PreferenceToggle, SettingsPanel, ThemeMode, ToggleOutcome};
use feedtags::search::{CatalogSearch, SearchError};
use feedtags::store::{FeedSettingsStore, PreferenceStore, SledStore};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn catalog() -> TagCatalog {
    TagCatalog::new(vec![
        TagCategory::new("languages", "Languages", &["rust", "go", "php", "python"]),
        TagCategory::new("devops", "DevOps", &["docker", "kubernetes"]),
    ])
    .unwrap()
}

fn open_store(dir: &Path) -> Arc<SledStore> {
    Arc::new(SledStore::open(dir.join("db")).unwrap())
}

fn controller(store: &Arc<SledStore>, policy: UnblockPolicy) -> TagSelectionController {
    TagSelectionController::builder()
        .store(Arc::clone(store) as Arc<dyn FeedSettingsStore>)
        .catalog(catalog())
        .policy(policy)
        .build()
        .unwrap()
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_follow_and_block_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = open_store(dir.path());
        let mut controller = controller(&store, UnblockPolicy::default());
        controller.on_follow("rust").unwrap();
        controller.on_follow("docker").unwrap();
        controller.on_block("php").unwrap();
        store.flush().unwrap();
    }

    let store = open_store(dir.path());
    let settings = store.feed_settings().unwrap();
    assert_eq!(settings.include_tags.len(), 2);
    assert!(settings.is_followed("rust"));
    assert!(settings.is_blocked("php"));
}

#[test]
fn test_browse_view_reflects_store() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    store.follow_tags(&tags(&["go"])).unwrap();
    store.block_tags(&tags(&["kubernetes"])).unwrap();

    let view = controller(&store, UnblockPolicy::default()).view_model().unwrap();
    assert_eq!(view.mode, FilterMode::Browse);
    assert_eq!(view.groups.len(), 2);
    assert_eq!(view.row_count(), 6);

    let go = &view.groups[0].rows[1];
    assert_eq!(go.tag, "go");
    assert!(go.is_followed);
    let kube = &view.groups[1].rows[1];
    assert!(kube.is_blocked && !kube.is_followed);
}

#[test]
fn test_search_flow_with_catalog_provider() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    store.follow_tags(&tags(&["pytorch"])).unwrap();

    let mut controller = controller(&store, UnblockPolicy::default());
    let provider = CatalogSearch::new(&catalog(), 10)
        .with_known_tags(store.feed_settings().unwrap().known_tags());

    controller.search_with("py", &provider);
    let view = controller.view_model().unwrap();
    assert_eq!(view.mode, FilterMode::Search);
    let names: Vec<_> = view.items.iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(names, vec!["python", "pytorch"]);
    assert!(view.items[1].is_followed);

    controller.on_follow("python").unwrap();
    assert!(controller.view_model().unwrap().items[0].is_followed);
}

#[test]
fn test_out_of_order_results_keep_latest_query() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    let mut controller = controller(&store, UnblockPolicy::default());

    let slow = controller.on_query_change("d").unwrap();
    let fast = controller.on_query_change("do").unwrap();

    assert!(controller.view_model().unwrap().pending);
    assert!(controller.resolve_search(&fast, Ok(tags(&["docker"]))));
    assert!(!controller.resolve_search(&slow, Ok(tags(&["django", "docker", "deno"]))));

    let view = controller.view_model().unwrap();
    assert_eq!(view.query, "do");
    assert_eq!(view.items.len(), 1);
    assert!(!view.pending);

    // The superseded result was cached under its own query
    assert!(controller.on_query_change("d").is_none());
    assert_eq!(controller.view_model().unwrap().items.len(), 3);
}

#[test]
fn test_failed_search_shows_empty_state() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    let mut controller = controller(&store, UnblockPolicy::default());

    let provider = |_: &str| Err::<Vec<String>, _>(SearchError::ProviderError("offline".to_string()));
    controller.search_with("rust", &provider);

    let view = controller.view_model().unwrap();
    assert!(view.items.is_empty());
    assert_eq!(view.empty_message, Some("No matching tags."));
}

#[test]
fn test_deferred_unblock_commit_and_cancel() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    store.block_tags(&tags(&["php", "go"])).unwrap();
    let mut controller = controller(&store, UnblockPolicy::AlwaysDeferred);

    let now = Utc::now();
    let UnblockOutcome::Deferred(php) = controller.on_unblock_at("php", now).unwrap() else {
        panic!("expected a deferred unblock");
    };
    let UnblockOutcome::Deferred(go) = controller.on_unblock_at("go", now).unwrap() else {
        panic!("expected a deferred unblock");
    };
    assert_eq!(php.deadline(), now + TimeDelta::seconds(5));
    assert!(store.feed_settings().unwrap().is_blocked("php"));

    php.commit().unwrap();
    go.cancel();

    let settings = store.feed_settings().unwrap();
    assert!(!settings.is_blocked("php"));
    assert!(settings.is_blocked("go"));
}

#[test]
fn test_anonymous_personalized_unblock_is_instant() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    store.block_tags(&tags(&["php"])).unwrap();

    let mut controller = TagSelectionController::builder()
        .store(Arc::clone(&store) as Arc<dyn FeedSettingsStore>)
        .auth(AuthState::Anonymous)
        .flags(FeatureFlags {
            personalized_feed: true,
            ..FeatureFlags::default()
        })
        .build()
        .unwrap();

    let outcome = controller.on_unblock("php").unwrap();
    assert!(!outcome.is_deferred());
    assert!(!store.feed_settings().unwrap().is_blocked("php"));
}

#[test]
fn test_moderation_menu_blocks_followed_tag() {
    let dir = TempDir::new().unwrap();
    let store = open_store(dir.path());
    store.follow_tags(&tags(&["docker"])).unwrap();
    let mut controller = controller(&store, UnblockPolicy::default());

    controller.on_open_moderation_menu("docker").unwrap();
    assert_eq!(controller.menu_block().unwrap(), Some("docker".to_string()));

    let settings = store.feed_settings().unwrap();
    assert!(settings.is_blocked("docker"));
    assert!(!settings.is_followed("docker"));
    assert!(controller.menu().selected().is_none());
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let signed_in = AuthState::Authenticated {
        user_id: "dev".to_string(),
    };
    {
        let store = open_store(dir.path());
        let mut panel = SettingsPanel::load(store.as_ref()).unwrap();
        panel.set_theme(ThemeMode::Light).unwrap();
        assert_eq!(
            panel.toggle(PreferenceToggle::ShowOnlyUnreadPosts, &signed_in).unwrap(),
            ToggleOutcome::Toggled(true)
        );
        store.flush().unwrap();
    }

    let store = open_store(dir.path());
    let prefs = store.load_preferences().unwrap();
    assert_eq!(prefs.theme, ThemeMode::Light);
    assert!(prefs.show_only_unread_posts);
}

#[test]
fn test_catalog_file_drives_browse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("categories.toml");
    fs::write(
        &path,
        r#"
[[categories]]
id = "frontend"
title = "Frontend"
emoji = "🎨"
tags = ["react", "vue"]
"#,
    )
    .unwrap();

    let store = open_store(dir.path());
    let controller = TagSelectionController::builder()
        .store(Arc::clone(&store) as Arc<dyn FeedSettingsStore>)
        .catalog(TagCatalog::load(&path).unwrap())
        .build()
        .unwrap();

    let view = controller.view_model().unwrap();
    assert_eq!(view.groups.len(), 1);
    assert_eq!(view.groups[0].emoji.as_deref(), Some("🎨"));
    assert_eq!(view.row_count(), 2);
}
