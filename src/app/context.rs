use crate::ports::{TemplateRenderer, TreeWriter, VersionControl};

/// Application context holding the ports a generation run needs.
pub struct AppContext<R: TemplateRenderer, W: TreeWriter, V: VersionControl> {
    renderer: R,
    writer: W,
    version_control: V,
}

impl<R: TemplateRenderer, W: TreeWriter, V: VersionControl> AppContext<R, W, V> {
    /// Create a new application context.
    pub fn new(renderer: R, writer: W, version_control: V) -> Self {
        Self { renderer, writer, version_control }
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the tree writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get a reference to the version control port.
    pub fn version_control(&self) -> &V {
        &self.version_control
    }
}
