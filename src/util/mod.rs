use std::sync::atomic::{AtomicU64, Ordering};

pub mod assets;
pub mod logging;
pub mod persistence;
pub mod version;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique id such as `toast-7`.
pub fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}
