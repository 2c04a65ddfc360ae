use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::memory::StoredSession;
use super::{AuthState, TOKEN_KEY, USER_INFO_KEY};

/// 落盘的凭证存储
///
/// 与浏览器本地存储相同，以 `token` 与 `userInfo` 为键保存两条字符串记录，
/// 进程重启后仍然有效。写盘失败只记录日志，内存中的值照常更新。
#[derive(Debug)]
pub struct FileAuthStore {
    path: PathBuf,
    inner: RwLock<StoredSession>,
    // 串行化写盘，保证文件内容与最后一次修改一致
    write_lock: Mutex<()>,
}

impl FileAuthStore {
    /// 打开存储文件；文件不存在时视为未登录
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let session = match fs::read_to_string(&path) {
            Ok(content) if !content.trim().is_empty() => decode(&content)?,
            Ok(_) => StoredSession::default(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoredSession::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            inner: RwLock::new(session),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 修改内存中的记录后写盘，写盘期间不持有读写锁
    fn update(&self, change: impl FnOnce(&mut StoredSession)) {
        let _writing = self.write_lock.lock();
        let content = {
            let mut session = self.inner.write();
            change(&mut session);
            encode(&session)
        };
        if let Err(e) = persist(&self.path, &content) {
            log::warn!("Failed to persist credentials to {}: {}", self.path.display(), e);
        }
    }
}

fn encode(session: &StoredSession) -> Value {
    let mut map = Map::new();
    if let Some(token) = &session.token {
        map.insert(TOKEN_KEY.to_string(), Value::String(token.clone()));
    }
    if let Some(info) = &session.user_info {
        map.insert(USER_INFO_KEY.to_string(), Value::String(info.clone()));
    }
    Value::Object(map)
}

fn decode(content: &str) -> anyhow::Result<StoredSession> {
    let map: Map<String, Value> = serde_json::from_str(content)?;
    let entry = |key: &str| -> anyhow::Result<Option<String>> {
        match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => anyhow::bail!("credential entry {} must be a string, got {}", key, other),
        }
    };
    Ok(StoredSession {
        token: entry(TOKEN_KEY)?,
        user_info: entry(USER_INFO_KEY)?,
    })
}

fn persist(path: &Path, content: &Value) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(content)?)?;
    Ok(())
}

impl AuthState for FileAuthStore {
    fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    fn set_token(&self, token: String) {
        self.update(|session| session.token = Some(token));
    }

    fn user_info(&self) -> Option<String> {
        self.inner.read().user_info.clone()
    }

    fn set_user_info(&self, info: String) {
        self.update(|session| session.user_info = Some(info));
    }

    fn clear(&self) {
        self.update(|session| *session = StoredSession::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_missing_file_is_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileAuthStore::open(dir.path().join("session.json")).unwrap();
        assert!(!store.is_authenticated());
        assert!(store.user_info().is_none());
    }

    #[test]
    fn test_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileAuthStore::open(&path).unwrap();
        store.set_token("jwt-1".to_string());
        store.set_user_info(r#"{"user_id":7,"username":"qa"}"#.to_string());

        let reopened = FileAuthStore::open(&path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("jwt-1"));
        assert_eq!(
            reopened.user_info().as_deref(),
            Some(r#"{"user_id":7,"username":"qa"}"#)
        );

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[TOKEN_KEY], "jwt-1");
        assert!(raw[USER_INFO_KEY].is_string());
    }

    #[test]
    fn test_reads_entries_written_by_browser_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token":"jwt-2","userInfo":"{}","theme":"dark"}"#).unwrap();

        let store = FileAuthStore::open(&path).unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-2"));
        assert_eq!(store.user_info().as_deref(), Some("{}"));
    }

    #[test]
    fn test_non_string_entry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"token":42}"#).unwrap();
        assert!(FileAuthStore::open(&path).is_err());
    }

    #[test]
    fn test_readers_are_not_blocked_by_writers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = Arc::new(FileAuthStore::open(&path).unwrap());
        store.set_token("jwt-0".to_string());

        let writer = {
            let store = store.clone();
            std::thread::spawn(move || {
                for i in 1..=50 {
                    store.set_token(format!("jwt-{}", i));
                }
            })
        };
        for _ in 0..200 {
            let token = store.token().unwrap();
            assert!(token.starts_with("jwt-"));
        }
        writer.join().unwrap();

        // 最后一次修改同时反映在内存和文件中
        assert_eq!(store.token().as_deref(), Some("jwt-50"));
        let reopened = FileAuthStore::open(&path).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("jwt-50"));
    }

    #[test]
    fn test_memory_is_updated_when_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        // 父路径是普通文件，无法创建目录
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = FileAuthStore::open(blocker.join("session.json")).unwrap();

        store.set_token("jwt-3".to_string());
        assert_eq!(store.token().as_deref(), Some("jwt-3"));
    }

    #[test]
    fn test_clear_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileAuthStore::open(&path).unwrap();
        store.set_token("jwt-1".to_string());
        store.set_user_info("{}".to_string());
        store.clear();

        let reopened = FileAuthStore::open(&path).unwrap();
        assert!(reopened.token().is_none());
        assert!(reopened.user_info().is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(FileAuthStore::open(&path).is_err());
    }
}
