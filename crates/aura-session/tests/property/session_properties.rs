//! Property tests for the bounded context window.

use aura_core::config::SessionConfig;
use aura_core::models::{MessageMetadata, Role, UserId};
use aura_session::ConversationStore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn history_never_exceeds_twice_window(window in 1usize..12, appends in 0usize..60) {
        let store = ConversationStore::new(SessionConfig { window_size: window }).unwrap();
        let user = UserId::from("p");
        for i in 0..appends {
            store.append(&user, Role::User, i.to_string(), MessageMetadata::new());
        }
        let history = store.history(&user, None);
        prop_assert_eq!(history.len(), appends.min(2 * window));
        // The retained tail is the most recent messages in order.
        let start = appends.saturating_sub(2 * window);
        for (offset, message) in history.iter().enumerate() {
            prop_assert_eq!(&message.content, &(start + offset).to_string());
        }
    }

    #[test]
    fn context_limit_is_respected(window in 1usize..8, appends in 0usize..30, limit in 0usize..40) {
        let store = ConversationStore::new(SessionConfig { window_size: window }).unwrap();
        let user = UserId::from("p");
        for i in 0..appends {
            store.append(&user, Role::Assistant, i.to_string(), MessageMetadata::new());
        }
        let context = store.get_context(&user, Some(limit));
        let len = limit.min(appends.min(2 * window));
        let expected: Vec<String> = (appends - len..appends).map(|i| i.to_string()).collect();
        let got: Vec<String> = context.into_iter().map(|e| e.content).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn default_context_after_overflow_is_latest_window(window in 1usize..10, k in 1usize..15) {
        let store = ConversationStore::new(SessionConfig { window_size: window }).unwrap();
        let user = UserId::from("p");
        let appends = 2 * window + k;
        for i in 0..appends {
            store.append(&user, Role::User, i.to_string(), MessageMetadata::new());
        }
        let got: Vec<String> = store
            .get_context(&user, None)
            .into_iter()
            .map(|e| e.content)
            .collect();
        let expected: Vec<String> = (appends - window..appends).map(|i| i.to_string()).collect();
        prop_assert_eq!(got, expected);
    }
}
