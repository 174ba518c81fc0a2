mod config_file_contract;
mod document_service_contract;
mod git_remote_contract;
mod rejects_existing_directory_contract;
mod rejects_invalid_config_contract;
