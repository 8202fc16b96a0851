use std::env;
use std::time::Duration;

use pickplace_roslibrust::action::{ServerOptions, DEFAULT_CALL_TIMEOUT};
use tracing::warn;

pub const DEFAULT_ACTION_NAME: &str = "pick_and_place";
pub const DEFAULT_BRIDGE_URL: &str = "ws://localhost:9090";
pub const DEFAULT_MOVE_SERVICE: &str = "/simple_arm_server/move";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub action_name: String,
    pub bridge_url: String,
    pub move_service: String,
    /// `None` disables the MoveArm call timeout.
    pub call_timeout: Option<Duration>,
}

impl Config {
    pub fn from_args() -> Self {
        Self::from_args_iter(env::args())
    }

    pub fn from_args_iter<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut action_name =
            env::var("PICKPLACE_ACTION_NAME").unwrap_or_else(|_| DEFAULT_ACTION_NAME.to_string());
        let mut bridge_url =
            env::var("PICKPLACE_BRIDGE_URL").unwrap_or_else(|_| DEFAULT_BRIDGE_URL.to_string());
        let mut move_service =
            env::var("PICKPLACE_MOVE_SERVICE").unwrap_or_else(|_| DEFAULT_MOVE_SERVICE.to_string());
        let mut call_timeout = Some(DEFAULT_CALL_TIMEOUT);
        if let Ok(value) = env::var("PICKPLACE_CALL_TIMEOUT_MS") {
            apply_timeout(&mut call_timeout, &value);
        }

        let mut args = iter.into_iter();
        let _ = args.next();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--action-name" => {
                    if let Some(value) = args.next() {
                        action_name = value.as_ref().to_string();
                    }
                }
                "--bridge-url" => {
                    if let Some(value) = args.next() {
                        bridge_url = value.as_ref().to_string();
                    }
                }
                "--move-service" => {
                    if let Some(value) = args.next() {
                        move_service = value.as_ref().to_string();
                    }
                }
                "--call-timeout-ms" => {
                    if let Some(value) = args.next() {
                        apply_timeout(&mut call_timeout, value.as_ref());
                    }
                }
                _ if arg.starts_with("--action-name=") => {
                    action_name = arg["--action-name=".len()..].to_string();
                }
                _ if arg.starts_with("--bridge-url=") => {
                    bridge_url = arg["--bridge-url=".len()..].to_string();
                }
                _ if arg.starts_with("--move-service=") => {
                    move_service = arg["--move-service=".len()..].to_string();
                }
                _ if arg.starts_with("--call-timeout-ms=") => {
                    apply_timeout(&mut call_timeout, &arg["--call-timeout-ms=".len()..]);
                }
                _ => warn!("ignoring unknown argument {arg}"),
            }
        }

        Self {
            action_name,
            bridge_url,
            move_service,
            call_timeout,
        }
    }

    pub fn server_options(&self) -> ServerOptions {
        ServerOptions {
            call_timeout: self.call_timeout,
        }
    }
}

fn print_usage() {
    println!(
        "pick_and_place_server [--action-name <name>] [--bridge-url ws://host:port] \
         [--move-service <service>] [--call-timeout-ms <ms, 0 = none>]"
    );
}

/// `0` disables the timeout; anything unparsable keeps the current value.
fn apply_timeout(slot: &mut Option<Duration>, value: &str) {
    match value.trim().parse::<u64>() {
        Ok(0) => *slot = None,
        Ok(ms) => *slot = Some(Duration::from_millis(ms)),
        Err(_) => warn!("invalid call timeout {value:?}; keeping {slot:?}"),
    }
}
