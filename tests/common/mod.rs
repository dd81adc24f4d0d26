use std::env;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub struct EnvGuard {
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_env("NEWSBRIEF_");
    }
}

pub fn with_newsbrief_env<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> EnvGuard {
    let guard = ENV_LOCK.lock().expect("Failed to lock env mutex");
    clear_env("NEWSBRIEF_");
    for (k, v) in vars {
        env::set_var(k, v);
    }
    EnvGuard { _lock: guard }
}

/// Seeds the one variable a valid configuration requires, the Anthropic API
/// key, plus any extras the test needs.
pub fn with_api_key_env<'a>(extra: impl IntoIterator<Item = (&'a str, &'a str)>) -> EnvGuard {
    let vars = [("NEWSBRIEF_ANTHROPIC_API_KEY", "test_key")]
        .into_iter()
        .chain(extra)
        .collect::<Vec<_>>();
    with_newsbrief_env(vars)
}

fn clear_env(prefix: &str) {
    for (key, _) in env::vars() {
        if key.starts_with(prefix) {
            env::remove_var(key);
        }
    }
}
