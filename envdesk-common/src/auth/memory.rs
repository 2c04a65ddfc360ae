use parking_lot::RwLock;

use super::AuthState;

/// 凭证与用户信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub user_info: Option<String>,
}

/// 进程内的凭证存储
#[derive(Debug, Default)]
pub struct MemoryAuthStore {
    inner: RwLock<StoredSession>,
}

impl MemoryAuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有凭证创建，主要给测试和命令行工具使用
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(StoredSession {
                token: Some(token.into()),
                user_info: None,
            }),
        }
    }

    pub fn snapshot(&self) -> StoredSession {
        self.inner.read().clone()
    }
}

impl AuthState for MemoryAuthStore {
    fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    fn set_token(&self, token: String) {
        self.inner.write().token = Some(token);
    }

    fn user_info(&self) -> Option<String> {
        self.inner.read().user_info.clone()
    }

    fn set_user_info(&self, info: String) {
        self.inner.write().user_info = Some(info);
    }

    fn clear(&self) {
        let mut session = self.inner.write();
        session.token = None;
        session.user_info = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_store_is_unauthenticated() {
        let store = MemoryAuthStore::new();
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_entries() {
        let store = MemoryAuthStore::with_token("abc");
        store.set_user_info(r#"{"user_id":1,"username":"admin"}"#.to_string());
        assert!(store.is_authenticated());

        store.clear();
        assert_eq!(store.snapshot(), StoredSession::default());
    }

    #[test]
    fn test_concurrent_readers_see_whole_values() {
        let store = Arc::new(MemoryAuthStore::with_token("old-token"));
        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    store.set_token("new-token".to_string());
                    store.clear();
                }
            })
        };

        for _ in 0..100 {
            match store.token().as_deref() {
                None | Some("old-token") | Some("new-token") => {}
                Some(other) => panic!("torn read: {}", other),
            }
        }
        writer.join().unwrap();
    }
}
