//! Provider seam for text generation.

use async_trait::async_trait;

use crate::error::Result;

/// Something that turns a prompt into text.
///
/// The gateway holds one of these behind an `Arc<dyn TextGenerator>`, so the
/// production client and scripted test doubles are interchangeable.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt` using `model`.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
