use crate::error::Result;
use crate::repository::UrlRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens the given URL and returns the generated short code.
    ///
    /// After a successful call, resolving the returned code yields
    /// exactly `original_url` until process termination.
    async fn shorten(&self, original_url: &str) -> Result<ShortCode>;

    /// Resolves a short code to its stored URL record.
    /// Fails with `NotFound` if the code does not exist.
    async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord>;
}
