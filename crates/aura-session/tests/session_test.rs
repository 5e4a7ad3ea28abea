use std::sync::Arc;
use std::thread;

use aura_core::config::{defaults, SessionConfig};
use aura_core::errors::{AuraError, ConfigError, SessionError};
use aura_core::models::{MessageMetadata, Role, SessionState, UserId};
use aura_session::ConversationStore;

fn store(window_size: usize) -> ConversationStore {
    ConversationStore::new(SessionConfig { window_size }).unwrap()
}

fn meta() -> MessageMetadata {
    MessageMetadata::new()
}

// ── Append and context window ─────────────────────────────────────────────

#[test]
fn context_is_chronological_and_stripped() {
    let store = ConversationStore::default();
    let user = UserId::from("u1");
    let mut metadata = meta();
    metadata.insert("crisis_detected".into(), serde_json::json!(false));
    store.append(&user, Role::User, "hello", metadata);
    store.append(&user, Role::Assistant, "hi there", meta());

    let context = store.get_context(&user, None);
    assert_eq!(context.len(), 2);
    assert_eq!(context[0].role, Role::User);
    assert_eq!(context[0].content, "hello");
    assert_eq!(context[1].content, "hi there");

    let history = store.history(&user, None);
    assert_eq!(history[0].metadata["crisis_detected"], serde_json::json!(false));
}

#[test]
fn retains_at_most_twice_the_window() {
    let window = 3;
    let store = store(window);
    let user = UserId::from(7u64);
    for i in 0..(2 * window + 4) {
        store.append(&user, Role::User, format!("m{i}"), meta());
    }

    let history = store.history(&user, None);
    assert_eq!(history.len(), 2 * window);
    assert_eq!(history.first().unwrap().content, "m4");
    assert_eq!(history.last().unwrap().content, "m9");
}

#[test]
fn default_context_limit_is_window_size() {
    let store = store(2);
    let user = UserId::from("u");
    for i in 0..4 {
        store.append(&user, Role::User, format!("m{i}"), meta());
    }
    assert_eq!(store.config().window_size, 2);
    let context = store.get_context(&user, None);
    let contents: Vec<_> = context.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["m2", "m3"]);
    assert_eq!(store.get_context(&user, Some(10)).len(), 4);
    assert_eq!(store.get_context(&user, Some(1))[0].content, "m3");
}

#[test]
fn context_after_overflow_is_latest_window_in_order() {
    let window = 4;
    let store = store(window);
    let user = UserId::from("overflow");
    // 2 × window + 3 appends: the first three are evicted.
    for i in 0..(2 * window + 3) {
        store.append(&user, Role::User, format!("m{i}"), meta());
    }

    let context = store.get_context(&user, Some(window));
    let contents: Vec<_> = context.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["m7", "m8", "m9", "m10"]);
    assert_eq!(store.get_context(&user, None), context);

    let retained: Vec<_> = store
        .history(&user, None)
        .into_iter()
        .map(|m| m.content)
        .collect();
    let expected: Vec<_> = (3..11).map(|i| format!("m{i}")).collect();
    assert_eq!(retained, expected);
}

#[test]
fn largest_window_appends_without_preallocating() {
    let store = store(defaults::MAX_WINDOW_SIZE);
    let user = UserId::from("big");
    store.append(&user, Role::User, "hello", meta());
    assert_eq!(store.capacity(), 2 * defaults::MAX_WINDOW_SIZE);
    assert_eq!(store.history(&user, None).len(), 1);
}

#[test]
fn oversized_window_is_rejected() {
    for window_size in [defaults::MAX_WINDOW_SIZE + 1, usize::MAX / 4] {
        let err = ConversationStore::new(SessionConfig { window_size }).unwrap_err();
        assert!(matches!(
            err,
            AuraError::ConfigError(ConfigError::InvalidWindow { .. })
        ));
    }
}

#[test]
fn zero_window_is_rejected() {
    let err = ConversationStore::new(SessionConfig { window_size: 0 }).unwrap_err();
    assert!(matches!(
        err,
        AuraError::ConfigError(ConfigError::InvalidWindow { window_size: 0 })
    ));
}

// ── Lifecycle ─────────────────────────────────────────────────────────────

#[test]
fn unknown_user_degrades_to_empty() {
    let store = ConversationStore::default();
    let ghost = UserId::from("ghost");
    assert!(store.get_context(&ghost, None).is_empty());
    assert!(store.history(&ghost, Some(5)).is_empty());
    let summary = store.summary(&ghost);
    assert_eq!(summary.message_count, 0);
    assert!(summary.last_message.is_none());
    assert_eq!(store.state(&ghost), SessionState::Absent);
}

#[test]
fn clear_is_idempotent_and_keeps_user_active() {
    let store = ConversationStore::default();
    let user = UserId::from("u");
    store.append(&user, Role::User, "one", meta());
    assert_eq!(store.state(&user), SessionState::Active);

    store.clear(&user);
    store.clear(&user);
    assert!(store.get_context(&user, None).is_empty());
    assert_eq!(store.state(&user), SessionState::Active);
    assert_eq!(store.user_count(), 1);

    store.append(&user, Role::User, "two", meta());
    assert_eq!(store.history(&user, None).len(), 1);
}

#[test]
fn clear_unknown_user_stays_absent() {
    let store = ConversationStore::default();
    let user = UserId::from("nobody");
    store.clear(&user);
    assert_eq!(store.state(&user), SessionState::Absent);
    assert_eq!(store.user_count(), 0);
}

#[test]
fn summary_counts_roles() {
    let store = ConversationStore::default();
    let user = UserId::from("u");
    store.append(&user, Role::User, "a", meta());
    store.append(&user, Role::Assistant, "b", meta());
    store.append(&user, Role::User, "c", meta());

    let summary = store.summary(&user);
    assert_eq!(summary.message_count, 3);
    assert_eq!(summary.user_message_count, 2);
    assert_eq!(summary.assistant_message_count, 1);
    assert!(summary.first_timestamp.is_some());
    assert_eq!(summary.last_message.unwrap().content, "c");
}

#[test]
fn users_are_isolated() {
    let store = ConversationStore::default();
    let a = UserId::from("a");
    let b = UserId::from("b");
    store.append(&a, Role::User, "from a", meta());
    store.append(&b, Role::User, "from b", meta());
    let mut ids = store.user_ids();
    ids.sort();
    assert_eq!(ids, vec![a.clone(), b.clone()]);
    store.clear(&a);
    assert!(store.history(&a, None).is_empty());
    assert_eq!(store.history(&b, None)[0].content, "from b");
}

// ── Export / import ───────────────────────────────────────────────────────

#[test]
fn export_then_import_into_another_user() {
    let store = ConversationStore::default();
    let src = UserId::from("src");
    let dst = UserId::from("dst");
    store.append(&src, Role::User, "hi", meta());
    store.append(&src, Role::Assistant, "hello", meta());

    let json = store.export(&src).unwrap();
    assert!(json.contains("\"role\": \"user\""));
    assert_eq!(store.import(&dst, &json).unwrap(), 2);
    assert_eq!(store.history(&dst, None), store.history(&src, None));
}

#[test]
fn import_trims_to_capacity() {
    let big = store(5);
    let user = UserId::from("u");
    for i in 0..10 {
        big.append(&user, Role::User, format!("m{i}"), meta());
    }
    let json = big.export(&user).unwrap();

    let small = store(2);
    assert_eq!(small.import(&user, &json).unwrap(), 4);
    assert_eq!(small.history(&user, None)[0].content, "m6");
}

#[test]
fn malformed_import_keeps_existing_history() {
    let store = ConversationStore::default();
    let user = UserId::from("u");
    store.append(&user, Role::User, "keep me", meta());

    let err = store.import(&user, "{not json").unwrap_err();
    assert!(matches!(
        err,
        AuraError::SessionError(SessionError::Deserialization { .. })
    ));
    assert_eq!(store.history(&user, None)[0].content, "keep me");
}

#[test]
fn unknown_user_exports_empty_array() {
    let store = ConversationStore::default();
    let json = store.export(&UserId::from("ghost")).unwrap();
    assert_eq!(json.trim(), "[]");
}

// ── Concurrency ───────────────────────────────────────────────────────────

#[test]
fn concurrent_appends_for_one_user_are_all_bounded() {
    let store = Arc::new(store(50));
    let user = UserId::from("shared");
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            let user = user.clone();
            thread::spawn(move || {
                for i in 0..20 {
                    store.append(&user, Role::User, format!("t{t}-{i}"), MessageMetadata::new());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.history(&user, None).len(), 100);
    assert_eq!(store.user_count(), 1);
}

#[test]
fn concurrent_users_do_not_interfere() {
    let store = ConversationStore::default();
    let handles: Vec<_> = (0..6u64)
        .map(|u| {
            let store = store.clone();
            thread::spawn(move || {
                let user = UserId::from(u);
                for i in 0..5 {
                    store.append(&user, Role::User, format!("{u}:{i}"), MessageMetadata::new());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(store.user_count(), 6);
    for u in 0..6u64 {
        let history = store.history(&UserId::from(u), None);
        assert_eq!(history.len(), 5);
        assert!(history.iter().all(|m| m.content.starts_with(&format!("{u}:"))));
    }
}
