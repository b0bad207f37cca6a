#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the developer's credentials.
pub fn rti() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimegaps");
    cmd.env_remove("CLOCKIFY_KEY").env_remove("CLOCKIFY_WORKSPACE_ID");
    cmd
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimegaps.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a config file whose log goes to the temp dir too.
/// Returns the config path.
pub fn write_config(name: &str, body: &str) -> String {
    let conf = temp_path(name, "conf");
    let log = temp_path(name, "log");
    fs::write(&conf, format!("log_file: {log}\n{body}")).expect("write test config");
    conf
}

/// Config with a key and an API base nobody listens on.
pub fn offline_config(name: &str) -> String {
    write_config(
        name,
        "api_key: test-key\nworkspace_id: ws-1\napi_base_url: http://127.0.0.1:9/api/v1\ntimezone: Asia/Manila\n",
    )
}
