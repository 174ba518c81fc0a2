use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn git_remote_initializes_and_commits_repository() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "new",
            "User",
            "--module",
            "example.com/user",
            "--git-remote",
            "https://example.com/acme/user-service.git",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed"));

    let repo = git2::Repository::open(ctx.service_dir("user-service")).unwrap();
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message(), Some(svcforge::COMMIT_MESSAGE));
    assert!(head.tree().unwrap().get_path(std::path::Path::new("go.mod")).is_ok());
    assert_eq!(
        repo.find_remote("origin").unwrap().url(),
        Some("https://example.com/acme/user-service.git")
    );
}

#[test]
fn no_git_skips_repository_even_with_remote() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "new",
            "User",
            "--module",
            "example.com/user",
            "--git-remote",
            "https://example.com/acme/user-service.git",
            "--no-git",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Committed").not());

    assert!(!ctx.service_dir("user-service/.git").exists());
}
