pub mod service_templates;
