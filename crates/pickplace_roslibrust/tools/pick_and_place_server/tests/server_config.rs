use std::env;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pick_and_place_server::config::{
    Config, DEFAULT_ACTION_NAME, DEFAULT_BRIDGE_URL, DEFAULT_MOVE_SERVICE,
};

const VARS: [&str; 4] = [
    "PICKPLACE_ACTION_NAME",
    "PICKPLACE_BRIDGE_URL",
    "PICKPLACE_MOVE_SERVICE",
    "PICKPLACE_CALL_TIMEOUT_MS",
];

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let guard = LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poison| poison.into_inner());
    for var in VARS {
        env::remove_var(var);
    }
    guard
}

#[test]
fn defaults_without_env_or_flags() {
    let _guard = env_lock();

    let config = Config::from_args_iter(["bin"]);
    assert_eq!(config.action_name, DEFAULT_ACTION_NAME);
    assert_eq!(config.bridge_url, DEFAULT_BRIDGE_URL);
    assert_eq!(config.move_service, DEFAULT_MOVE_SERVICE);
    assert_eq!(config.call_timeout, Some(Duration::from_secs(60)));
}

#[test]
fn flags_in_both_forms_are_accepted() {
    let _guard = env_lock();

    let config = Config::from_args_iter([
        "bin",
        "--action-name",
        "stack_blocks",
        "--bridge-url=ws://arm:9090",
        "--move-service",
        "/arm/move",
        "--call-timeout-ms=2500",
    ]);
    assert_eq!(config.action_name, "stack_blocks");
    assert_eq!(config.bridge_url, "ws://arm:9090");
    assert_eq!(config.move_service, "/arm/move");
    assert_eq!(config.call_timeout, Some(Duration::from_millis(2500)));
}

#[test]
fn env_sets_values_and_flags_override_env() {
    let _guard = env_lock();
    env::set_var("PICKPLACE_ACTION_NAME", "from_env");
    env::set_var("PICKPLACE_MOVE_SERVICE", "/env/move");

    let config = Config::from_args_iter(["bin", "--action-name", "from_flag"]);
    assert_eq!(config.action_name, "from_flag");
    assert_eq!(config.move_service, "/env/move");

    env::remove_var("PICKPLACE_ACTION_NAME");
    env::remove_var("PICKPLACE_MOVE_SERVICE");
}

#[test]
fn zero_timeout_disables_the_limit() {
    let _guard = env_lock();
    env::set_var("PICKPLACE_CALL_TIMEOUT_MS", "0");

    let config = Config::from_args_iter(["bin"]);
    assert_eq!(config.call_timeout, None);
    assert_eq!(config.server_options().call_timeout, None);

    env::remove_var("PICKPLACE_CALL_TIMEOUT_MS");
}

#[test]
fn invalid_timeout_keeps_previous_value() {
    let _guard = env_lock();
    env::set_var("PICKPLACE_CALL_TIMEOUT_MS", "750");

    let config = Config::from_args_iter(["bin", "--call-timeout-ms", "soon"]);
    assert_eq!(config.call_timeout, Some(Duration::from_millis(750)));

    env::remove_var("PICKPLACE_CALL_TIMEOUT_MS");
}

#[test]
fn unknown_arguments_are_ignored() {
    let _guard = env_lock();

    let config = Config::from_args_iter(["bin", "--verbose", "--action-name", "a"]);
    assert_eq!(config.action_name, "a");
}
