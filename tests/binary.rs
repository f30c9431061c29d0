use std::process::{Command, Output};

fn rss_reader(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rss_reader"))
        .args(args)
        .output()
        .expect("failed to spawn rss_reader")
}

fn write_feed(dir: &tempfile::TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn json_output_on_stdout_and_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(
        &dir,
        "feed.xml",
        "<rss><channel><item><title>Hello</title><link>http://x</link></item></channel></rss>",
    );
    let out = rss_reader(&[&feed, "--json"]);
    assert!(out.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(parsed[0]["title"], "Hello");
    assert_eq!(parsed[0]["link"], "http://x");
    assert_eq!(parsed[0]["categories"], serde_json::json!([]));
}

#[test]
fn empty_channel_prints_empty_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir, "empty.xml", "<rss><channel><title>t</title></channel></rss>");
    let out = rss_reader(&["--json", &feed]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "[]");
}

#[test]
fn missing_url_exits_with_usage_code() {
    let out = rss_reader(&["--json"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing feed URL"));
}

#[test]
fn malformed_feed_exits_non_zero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir, "bad.xml", "<rss><channel><item>");
    let out = rss_reader(&[&feed]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("malformed feed"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let feed = write_feed(&dir, "feed.xml", "<rss><channel/></rss>");
    let cfg = write_feed(&dir, "cfg.toml", "[fetch]\nretries = 2\n");
    let out = rss_reader(&[&feed, "--config", &cfg]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("config error"));
}

#[test]
fn help_exits_zero() {
    let out = rss_reader(&["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage: rss_reader"));
}
