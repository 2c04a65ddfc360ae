#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use envdesk_api::ConsoleApi;
use envdesk_common::{AuthState, MemoryAuthStore, Transport};
use parking_lot::Mutex;

/// 指向 mock 服务的客户端，记录提示和登录跳转
pub struct Harness {
    pub api: ConsoleApi,
    pub store: Arc<MemoryAuthStore>,
    pub notices: Arc<Mutex<Vec<String>>>,
    pub redirected: Arc<AtomicBool>,
}

impl Harness {
    pub fn new(base_url: &str) -> Self {
        Self::with_store(base_url, MemoryAuthStore::new())
    }

    pub fn with_store(base_url: &str, store: MemoryAuthStore) -> Self {
        let store = Arc::new(store);
        let notices = Arc::new(Mutex::new(Vec::new()));
        let redirected = Arc::new(AtomicBool::new(false));

        let sink = notices.clone();
        let flag = redirected.clone();
        let transport = Transport::builder(base_url)
            .auth(store.clone() as Arc<dyn AuthState>)
            .notifier(Arc::new(move |msg: &str| sink.lock().push(msg.to_string())))
            .on_unauthorized(Arc::new(move || flag.store(true, Ordering::SeqCst)))
            .build()
            .unwrap();

        Self {
            api: ConsoleApi::with_transport(Arc::new(transport)),
            store,
            notices,
            redirected,
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().clone()
    }

    pub fn was_redirected(&self) -> bool {
        self.redirected.load(Ordering::SeqCst)
    }
}

pub fn envelope(data: serde_json::Value) -> String {
    serde_json::json!({"code": 200, "data": data, "msg": "success"}).to_string()
}
