//! Tool definitions module.
//!
//! One file per tool. Each file declares the tool's parameters and the
//! upstream request it makes; they are registered in `registry.rs`.

pub mod google_doc;
pub mod pdf;
pub mod transcript;
pub mod tweet_thread;
pub mod webpage;

pub use google_doc::{GoogleDocMarkdownParams, GoogleDocMarkdownTool};
pub use pdf::{PdfParams, PdfTool};
pub use transcript::{YoutubeTranscriptParams, YoutubeTranscriptTool};
pub use tweet_thread::{TweetThreadParams, TweetThreadTool};
pub use webpage::{WebpageMarkdownParams, WebpageMarkdownTool};
