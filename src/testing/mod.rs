
pub use config_fixture::sample_config;
pub use ports::{
    FailingTreeWriter, FailingVersionControl, MemoryTreeWriter, RecordingVersionControl,
    StubTemplateRenderer,
};
