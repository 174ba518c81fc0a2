use clap::ValueEnum;

use crate::app::api;
use crate::domain::AppError;

use super::ConfigArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(super) enum PlanFormat {
    Text,
    Json,
}

pub(super) fn run_plan(args: ConfigArgs, format: PlanFormat) -> Result<(), AppError> {
    let plan = api::plan(args.into_raw()?)?;

    match format {
        PlanFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).map_err(|e| {
                AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })?;
            println!("{}", json);
        }
        PlanFormat::Text => {
            println!(
                "📁 {}/ ({} storage{})",
                plan.service_dir,
                plan.features.storage.label(),
                if plan.features.message_queue { ", message queue" } else { "" }
            );
            for path in &plan.files {
                println!("  {}", path);
            }
            println!("{} files, fingerprint {}", plan.files.len(), plan.fingerprint);
        }
    }
    Ok(())
}
