use crate::domain::configuration::ServiceConfig;
use crate::domain::features::FeatureSet;
use crate::domain::names::DerivedNames;

/// Render the generated service's `README.md`.
pub fn render(config: &ServiceConfig, names: &DerivedNames, features: &FeatureSet) -> String {
    let container = if features.is_relational() { "table" } else { "collection" };
    let storage = format!(
        "{} database `{}`, {} `{}`",
        features.storage.product(),
        config.database_name,
        container,
        config.table_name
    );
    let queue = if features.has_message_queue() { "enabled (RabbitMQ)" } else { "disabled" };

    format!(
        r#"# {name} Service

gRPC service for `{name}` resources, listening on port {port}.

## Quick start

```bash
make proto   # generate gRPC stubs from api/proto/{proto}
export {key_env}=...   # required, the service refuses to start without it
make run
```

## Configuration

Edit `config/config.yaml`. Every key can be overridden with an environment
variable of the same path (for example `SERVER_PORT`).

- Storage: {storage}
- Cache: Redis DB {cache_db}, key prefix `{cache_prefix}:`
- Message queue: {queue}
- Token signing key: read from `{key_env}`

## Layout

- `cmd/server/` entry point
- `internal/` handlers, domain logic, models, middleware
- `pkg/` configuration, logging, errors, database clients
- `api/proto/` API schema
- `deployments/` container build and compose files
"#,
        name = names.type_name,
        port = config.port,
        proto = names.proto_file(),
        key_env = config.signing_key_env,
        cache_db = config.cache_db,
        cache_prefix = config.cache_prefix,
    )
}
