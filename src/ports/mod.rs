mod template_renderer;
mod tree_writer;
mod version_control;

pub use template_renderer::TemplateRenderer;
pub use tree_writer::TreeWriter;
pub use version_control::VersionControl;
