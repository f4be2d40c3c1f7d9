use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily set or removed.
///
/// Serializes access to process-global env vars across parallel tests and
/// restores the previous values on drop, including on panic.
///
/// `changes` holds `(key, Some(value))` to set and `(key, None)` to remove.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = EnvGuard::apply(changes);
    f()
}

struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let previous = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in changes {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        Self { previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Catalog file content with two custom periods.
#[allow(dead_code)]
pub const CUSTOM_CATALOG: &str = r#"
[repository]
type = "local"

[[periods]]
label = "Yesterday"
true_positives = 8
false_positives = 2
true_negatives = 88
false_negatives = 2

[[periods]]
label = "Last quarter"
true_positives = 4000
false_positives = 500
true_negatives = 40000
false_negatives = 300
"#;
