pub mod materializer;
pub mod service_files;
