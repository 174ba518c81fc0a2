use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn new_rejects_existing_service_directory() {
    let ctx = TestContext::new();
    ctx.write("user-service/keep.txt", "mine");

    ctx.cli()
        .args(["new", "User", "--module", "example.com/user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.read("user-service/keep.txt"), "mine");
    assert!(!ctx.service_dir("user-service").join("go.mod").exists());
}

#[test]
fn second_run_into_same_directory_fails() {
    let ctx = TestContext::new();
    let args = ["new", "User", "--module", "example.com/user"];

    ctx.cli().args(args).assert().success();
    ctx.cli().args(args).assert().failure().stderr(predicate::str::contains("already exists"));
}

#[test]
fn output_dir_selects_parent_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "User", "--module", "example.com/user", "--output-dir", "services"])
        .assert()
        .success();

    assert!(ctx.service_dir("services/user-service/go.mod").is_file());
}
