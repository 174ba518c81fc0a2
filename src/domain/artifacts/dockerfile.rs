use crate::domain::configuration::ServiceConfig;
use crate::domain::features::FeatureSet;
use crate::domain::names::DerivedNames;

use super::manifest::GO_VERSION;

/// Render the container build file. The exposed port is the configured port.
pub fn render(config: &ServiceConfig, _names: &DerivedNames, _features: &FeatureSet) -> String {
    format!(
        r#"FROM golang:{go}-alpine AS builder

WORKDIR /app

COPY go.mod go.sum ./
RUN go mod download

COPY . .
RUN CGO_ENABLED=0 go build -o bin/server cmd/server/main.go

FROM alpine:3.19

RUN adduser -D -u 10001 app
WORKDIR /app

COPY --from=builder /app/bin/server .
COPY --from=builder /app/config ./config

USER app

EXPOSE {port}

CMD ["./server"]
"#,
        go = GO_VERSION,
        port = config.port,
    )
}
