//! Go module manifest.

use crate::domain::configuration::ServiceConfig;
use crate::domain::features::FeatureSet;
use crate::domain::names::DerivedNames;

pub const GO_VERSION: &str = "1.21";

/// A module requirement line in `go.mod`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Requirement {
    pub module: &'static str,
    pub version: &'static str,
}

const BASE_REQUIREMENTS: [Requirement; 7] = [
    Requirement { module: "github.com/golang-jwt/jwt/v5", version: "v5.2.1" },
    Requirement { module: "github.com/google/uuid", version: "v1.6.0" },
    Requirement { module: "github.com/redis/go-redis/v9", version: "v9.5.1" },
    Requirement { module: "github.com/spf13/viper", version: "v1.18.2" },
    Requirement { module: "go.uber.org/zap", version: "v1.27.0" },
    Requirement { module: "google.golang.org/grpc", version: "v1.62.0" },
    Requirement { module: "google.golang.org/protobuf", version: "v1.32.0" },
];

const POSTGRES: Requirement = Requirement { module: "github.com/lib/pq", version: "v1.10.9" };
const MONGODB: Requirement =
    Requirement { module: "go.mongodb.org/mongo-driver", version: "v1.13.1" };
const AMQP: Requirement =
    Requirement { module: "github.com/rabbitmq/amqp091-go", version: "v1.9.0" };

/// Requirements for the active feature set, sorted by module path.
pub fn requirements(features: &FeatureSet) -> Vec<Requirement> {
    let mut requirements = BASE_REQUIREMENTS.to_vec();
    requirements.push(if features.is_relational() { POSTGRES } else { MONGODB });
    if features.has_message_queue() {
        requirements.push(AMQP);
    }
    requirements.sort();
    requirements
}

/// Render `go.mod`.
pub fn render(config: &ServiceConfig, _names: &DerivedNames, features: &FeatureSet) -> String {
    let require = requirements(features)
        .iter()
        .map(|req| format!("\t{} {}\n", req.module, req.version))
        .collect::<String>();

    format!("module {}\n\ngo {}\n\nrequire (\n{})\n", config.module_path, GO_VERSION, require)
}
