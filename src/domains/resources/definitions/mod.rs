//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and
//! loader, then registered in `registry.rs`.

pub mod app_log;

pub use app_log::AppLogResource;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the resource text.
    fn load() -> String;
}
