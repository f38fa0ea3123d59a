//! Application log resource definition.

use super::ResourceDefinition;

/// Placeholder application log. Not backed by a real file.
pub struct AppLogResource;

impl ResourceDefinition for AppLogResource {
    const URI: &'static str = "file:///logs/app.log";
    const NAME: &'static str = "Application Logs";
    const DESCRIPTION: &'static str = "Application log output";
    const MIME_TYPE: &'static str = "text/plain";

    fn load() -> String {
        "Example log content".to_string()
    }
}
