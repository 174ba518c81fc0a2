use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn new_reads_toml_config_and_flags_override_it() {
    let ctx = TestContext::new();
    let config = ctx.write(
        "svc.toml",
        r#"name = "Payment"
module_path = "github.com/acme/payment-service"
port = 6000
backend = "document"
table_name = "ledger"
"#,
    );

    ctx.cli()
        .args(["new", "--config"])
        .arg(&config)
        .args(["--port", "7000"])
        .assert()
        .success();

    assert!(ctx.service_dir("payment-service/pkg/database/mongodb.go").is_file());
    assert!(ctx.read("payment-service/deployments/docker/Dockerfile").contains("EXPOSE 7000"));
    assert!(ctx.read("payment-service/config/config.yaml").contains("collection: \"ledger\""));
}

#[test]
fn new_reads_yaml_config() {
    let ctx = TestContext::new();
    let config = ctx.write(
        "svc.yaml",
        "name: Invoice\nmodule_path: example.com/invoice\nsigning_key_env: INVOICE_SIGNING_KEY\n",
    );

    ctx.cli().args(["new", "--config"]).arg(&config).assert().success();

    let loader = ctx.read("invoice-service/pkg/config/config.go");
    assert!(loader.contains("\"INVOICE_SIGNING_KEY\""));
}

#[test]
fn new_reports_unknown_config_keys() {
    let ctx = TestContext::new();
    let config = ctx.write("svc.toml", "name = \"User\"\nmodule = \"example.com/user\"\n");

    ctx.cli()
        .args(["new", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"));
}

#[test]
fn new_backend_flag_replaces_config_file_backend() {
    let ctx = TestContext::new();
    let config = ctx.write(
        "svc.toml",
        r#"name = "Catalog"
module_path = "github.com/acme/catalog-service"
backend = "postgres"
"#,
    );

    ctx.cli().args(["new", "--config"]).arg(&config).arg("--mongodb").assert().success();

    assert!(ctx.service_dir("catalog-service/pkg/database/mongodb.go").is_file());
    assert!(!ctx.service_dir("catalog-service/pkg/database/postgres.go").exists());
}
