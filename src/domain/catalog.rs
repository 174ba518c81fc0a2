//! Static catalog of templated outputs.
//!
//! The catalog is a registry of groups. The base group is always emitted;
//! every other group is gated by exactly one predicate over [`FeatureSet`].
//! Adding an optional component means adding one group to [`CATALOG`].

use super::features::FeatureSet;

/// Suffix appended to an output path to find its template.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// One templated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateEntry {
    /// Path relative to the service root.
    pub output_path: &'static str,
    /// Identifier of the embedded template.
    pub template: &'static str,
}

/// A set of entries activated together.
#[derive(Debug, Clone, Copy)]
pub struct TemplateGroup {
    pub name: &'static str,
    pub is_active: fn(&FeatureSet) -> bool,
    pub entries: &'static [TemplateEntry],
}

macro_rules! entry {
    ($path:literal) => {
        TemplateEntry { output_path: $path, template: concat!($path, ".j2") }
    };
    ($path:literal => $template:literal) => {
        TemplateEntry { output_path: $path, template: $template }
    };
}

static BASE: [TemplateEntry; 20] = [
    entry!("cmd/server/main.go"),
    entry!("pkg/config/config.go"),
    entry!("pkg/logger/logger.go"),
    entry!("pkg/errors/errors.go"),
    entry!("pkg/database/redis.go"),
    entry!("internal/repository/cache/cache_repository.go"),
    entry!("internal/handler/handler.go"),
    entry!("internal/service/service.go"),
    entry!("internal/model/model.go"),
    entry!("internal/validator/validator.go"),
    entry!("internal/middleware/auth.go"),
    entry!("internal/middleware/logging.go"),
    entry!("internal/middleware/recovery.go"),
    entry!("internal/middleware/tracing.go"),
    entry!("internal/middleware/validator.go"),
    entry!("config/config.yaml"),
    entry!("deployments/docker/docker-compose.yml"),
    entry!(".github/workflows/ci-cd.yml"),
    entry!(".golangci.yml"),
    entry!(".dockerignore"),
];

static RELATIONAL: [TemplateEntry; 4] = [
    entry!("pkg/database/postgres.go"),
    entry!("internal/repository/repository.go" => "internal/repository/repository_postgres.go.j2"),
    entry!("migrations/000001_init.up.sql"),
    entry!("migrations/000001_init.down.sql"),
];

static DOCUMENT: [TemplateEntry; 1] = [entry!("pkg/database/mongodb.go")];

static MESSAGE_QUEUE: [TemplateEntry; 2] =
    [entry!("pkg/queue/queue.go"), entry!("internal/worker/worker.go")];

fn always(_: &FeatureSet) -> bool {
    true
}

/// Every template group, in emission order.
pub static CATALOG: [TemplateGroup; 4] = [
    TemplateGroup { name: "base", is_active: always, entries: &BASE },
    TemplateGroup {
        name: "relational",
        is_active: FeatureSet::is_relational,
        entries: &RELATIONAL,
    },
    TemplateGroup { name: "document", is_active: FeatureSet::is_document, entries: &DOCUMENT },
    TemplateGroup {
        name: "message-queue",
        is_active: FeatureSet::has_message_queue,
        entries: &MESSAGE_QUEUE,
    },
];

/// Directories reserved by the service layout that start out empty.
static PLACEHOLDER_DIRS: [&str; 6] = [
    "migrations",
    "scripts",
    "docs",
    "test/integration",
    "deployments/kubernetes",
    "helm/templates",
];

/// Resolve the ordered list of entries active for `features`.
pub fn resolve(features: &FeatureSet) -> Vec<&'static TemplateEntry> {
    active_groups(features).flat_map(|group| group.entries.iter()).collect()
}

/// Groups whose predicate holds for `features`, in catalog order.
pub fn active_groups(features: &FeatureSet) -> impl Iterator<Item = &'static TemplateGroup> + '_ {
    CATALOG.iter().filter(move |group| (group.is_active)(features))
}

pub fn placeholder_dirs() -> &'static [&'static str] {
    &PLACEHOLDER_DIRS
}
