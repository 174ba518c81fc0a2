use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn new_rejects_missing_module_path_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "User"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid configuration for 'module_path'"));

    assert!(!ctx.service_dir("user-service").exists());
}

#[test]
fn new_rejects_out_of_range_port() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "User", "--module", "example.com/user", "--port", "70000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'port'"));

    assert!(!ctx.service_dir("user-service").exists());
}

#[test]
fn new_rejects_out_of_range_cache_db() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "User", "--module", "example.com/user", "--cache-db", "16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'cache_db'"));
}

#[test]
fn new_rejects_unknown_backend() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "User", "--module", "example.com/user", "--backend", "redis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'backend'"));
}

#[test]
fn new_rejects_invalid_service_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "9lives", "--module", "example.com/cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'name'"));
}

#[test]
fn new_rejects_malformed_storage_identifiers() {
    let ctx = TestContext::new();

    for (flag, value, field) in [
        ("--table", "user \"rows", "'table_name'"),
        ("--cache-prefix", "a\"b", "'cache_prefix'"),
        ("--database", "order-db", "'database_name'"),
    ] {
        ctx.cli()
            .args(["new", "User", "--module", "example.com/user", flag, value])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(field));
    }

    assert!(!ctx.service_dir("user-service").exists());
}
