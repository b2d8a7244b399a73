use std::path;

use snapbox::cmd::Command;

fn plume() -> Command {
    Command::new(env!("CARGO_BIN_EXE_plume"))
}

fn fixture(name: &str) -> path::PathBuf {
    path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn requires_subcommand() {
    plume().assert().failure();
}

#[test]
fn check_valid_site() {
    let assert = plume()
        .args(["check", "--color", "never"])
        .current_dir(fixture("blog"))
        .assert()
        .success();
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("[info]"), "{stderr}");
    assert!(stderr.contains("are valid"), "{stderr}");
    assert!(stderr.contains("links are relative"), "{stderr}");
}

#[test]
fn check_explicit_config_path() {
    let config = fixture("blog").join("pelicanconf.yml");
    plume()
        .arg("check")
        .arg("--config")
        .arg(&config)
        .assert()
        .success();
}

#[test]
fn check_quiet_is_silent() {
    let assert = plume()
        .args(["check", "-qq"])
        .current_dir(fixture("blog"))
        .assert()
        .success();
    assert!(assert.get_output().stderr.is_empty());
}

#[test]
fn check_reports_malformed_key() {
    let assert = plume()
        .arg("check")
        .current_dir(fixture("broken"))
        .assert()
        .failure();
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("MENUITEMS"), "{stderr}");
}

#[test]
fn check_reports_missing_theme() {
    let assert = plume()
        .arg("check")
        .current_dir(fixture("missing_theme"))
        .assert()
        .failure();
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("THEME"), "{stderr}");
}

#[test]
fn check_without_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let assert = plume()
        .arg("check")
        .current_dir(dir.path())
        .assert()
        .failure();
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("pelicanconf.yml"), "{stderr}");
}

#[test]
fn debug_menu_keeps_order() {
    let assert = plume()
        .args(["debug", "menu"])
        .current_dir(fixture("blog"))
        .assert()
        .success();
    let stdout = stdout_of(assert.get_output());
    let archives = stdout.find("Archives -> /archives.html").unwrap();
    let categories = stdout.find("Categories -> /categories.html").unwrap();
    let tags = stdout.find("Tags -> /tags.html").unwrap();
    assert!(archives < categories && categories < tags, "{stdout}");

    let twitter = stdout.find("twitter -> ").unwrap();
    let github = stdout.find("github -> ").unwrap();
    assert!(twitter < github, "{stdout}");
}

#[test]
fn debug_feeds_disabled() {
    let assert = plume()
        .args(["debug", "feeds"])
        .current_dir(fixture("blog"))
        .assert()
        .success();
    let stdout = stdout_of(assert.get_output());
    assert_eq!(stdout.lines().count(), 5, "{stdout}");
    assert!(stdout.lines().all(|l| l.ends_with(": disabled")), "{stdout}");
}

#[test]
fn debug_config_round_trips() {
    let assert = plume()
        .args(["debug", "config"])
        .current_dir(fixture("blog"))
        .assert()
        .success();
    let stdout = stdout_of(assert.get_output());
    let printed: plume_config::SiteConfiguration = stdout.parse().unwrap();
    let loaded = plume_config::SiteConfiguration::load(fixture("blog").join("pelicanconf.yml"))
        .unwrap();
    assert_eq!(printed.menuitems, loaded.menuitems);
    assert_eq!(printed.social, loaded.social);
    assert_eq!(printed.feeds, loaded.feeds);
    assert_eq!(printed.extra, loaded.extra);
}

#[test]
fn init_creates_loadable_settings() {
    let dir = tempfile::tempdir().unwrap();
    let site = dir.path().join("site");
    plume().arg("init").arg(&site).assert().success();

    let config = plume_config::SiteConfiguration::load(site.join("pelicanconf.yml")).unwrap();
    config.verify_paths().unwrap();

    plume()
        .args(["check", "--config"])
        .arg(site.join("pelicanconf.yml"))
        .assert()
        .success();
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    plume().arg("init").arg(dir.path()).assert().success();
    let assert = plume().arg("init").arg(dir.path()).assert().failure();
    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("already exists"), "{stderr}");
}
