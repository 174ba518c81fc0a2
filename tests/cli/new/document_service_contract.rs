use crate::harness::TestContext;

#[test]
fn new_generates_document_feed_service() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "new",
            "Feed",
            "--module",
            "github.com/acme/feed-service",
            "--mongodb",
            "--port",
            "50053",
        ])
        .assert()
        .success();

    let root = ctx.service_dir("feed-service");
    assert!(root.join("pkg/database/mongodb.go").is_file());
    assert!(!root.join("pkg/database/postgres.go").exists());
    assert!(!root.join("internal/repository/repository.go").exists());
    assert!(!root.join("migrations/000001_init.up.sql").exists());
    assert!(root.join("migrations/.gitkeep").is_file());

    let proto = ctx.read("feed-service/api/proto/feed.proto");
    assert!(proto.contains("service FeedService {"));
    assert!(proto.contains("string id = 1;"));

    assert!(ctx.read("feed-service/deployments/docker/Dockerfile").contains("EXPOSE 50053"));
    assert!(ctx.read("feed-service/config/config.yaml").contains("port: 50053"));
    assert!(ctx.read("feed-service/go.mod").contains("go.mongodb.org/mongo-driver"));
}

#[test]
fn backend_name_selects_document_storage() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "Feed", "--module", "example.com/feed", "--backend", "mongodb"])
        .assert()
        .success();

    assert!(ctx.service_dir("feed-service").join("pkg/database/mongodb.go").is_file());
}
