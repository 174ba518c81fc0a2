pub mod assets;
mod filesystem_tree_writer;
mod git_repository;

pub use assets::service_templates::EmbeddedTemplateRenderer;
pub use filesystem_tree_writer::FilesystemTreeWriter;
pub use git_repository::GitRepository;
