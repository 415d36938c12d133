// tests/process_env_test.rs
use ci_version::domain::{snapshot_process_env, Context};
use serial_test::serial;

#[test]
#[serial]
fn test_snapshot_sees_process_variables() {
    std::env::set_var("CI_VERSION_TEST_MARKER", "present");
    let env = snapshot_process_env();
    std::env::remove_var("CI_VERSION_TEST_MARKER");

    assert_eq!(
        env.get("CI_VERSION_TEST_MARKER").map(String::as_str),
        Some("present")
    );
}

#[test]
#[serial]
fn test_snapshot_is_isolated_from_later_changes() {
    std::env::set_var("GITHUB_REF", "refs/heads/first");
    let env = snapshot_process_env();
    std::env::set_var("GITHUB_REF", "refs/heads/second");

    let context = Context::from_env(&env).unwrap();
    std::env::remove_var("GITHUB_REF");

    assert_eq!(context.branch(), Some("first"));
}
