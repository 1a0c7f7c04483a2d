use std::fs;
use std::time::Duration;

use cmdpat::completer::Completer;
use cmdpat::config::{ConfigLoader, DefaultConfigLoader};
use indoc::indoc;
use tempfile::TempDir;

#[test]
fn loaded_config_drives_completion_and_http_settings() {
    let tmp = TempDir::new().unwrap();
    let global = tmp.path().join("cmdpat.yml");
    fs::write(
        &global,
        indoc! {"
            http:
              connect_timeout_ms: 2000
            commands:
              - pattern: 'create stream <stream-id> [ttl <ttl>]'
              - pattern: 'list streams'
        "},
    )
    .unwrap();
    let cwd = tmp.path().join("project");
    fs::create_dir_all(&cwd).unwrap();
    fs::write(
        cwd.join("cmdpat.yml"),
        indoc! {"
            http:
              verify_ssl_cert: false
            commands:
              - pattern: 'create dataset <name>'
        "},
    )
    .unwrap();

    let config = DefaultConfigLoader::with_global_path(global)
        .load(&cwd)
        .unwrap();

    let http = config.http_request_config();
    assert_eq!(http.connect_timeout(), Duration::from_secs(2));
    assert_eq!(http.read_timeout(), Duration::from_secs(15));
    assert!(!http.verify_ssl_cert());

    let completer = config.completer();
    assert_eq!(
        completer.complete("create"),
        vec!["create stream", "create dataset"]
    );
    assert_eq!(completer.complete("l"), vec!["list streams"]);
}
