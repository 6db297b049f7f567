use crate::generator::Generator;
use async_trait::async_trait;
use pinhole_core::{
    validate_url, Repository, Result, ShortCode, Shortener, ShortenerError, UrlRecord,
};
use std::sync::Arc;
use tracing::debug;

/// Cap on identifier regeneration. With a 2^32 code space a single
/// collision is already unlikely; hitting this cap means the space is
/// close to full.
const MAX_GENERATE_ATTEMPTS: u32 = 16;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation
/// - Short code generation with collision retry
/// - Lookup of stored URLs
#[derive(Debug, Clone)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` over the given repository and generator.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode> {
        validate_url(original_url)?;

        for attempt in 0..MAX_GENERATE_ATTEMPTS {
            let code: ShortCode = self.generator.generate().into();

            // Cheap read-side check first. The insert below still decides
            // under the shard lock, so two callers racing on the same
            // candidate cannot both claim it.
            if self.repository.exists(&code).await? {
                debug!(attempt, code = %code, "short code collision, regenerating");
                continue;
            }

            let record = UrlRecord {
                original_url: original_url.to_owned(),
            };
            match self.repository.insert(&code, record).await {
                Ok(()) => return Ok(code),
                Err(ShortenerError::CodeConflict(_)) => {
                    debug!(attempt, code = %code, "lost insert race, regenerating");
                    continue;
                }
                Err(other) => return Err(other),
            }
        }

        Err(ShortenerError::IdSpaceExhausted(MAX_GENERATE_ATTEMPTS))
    }

    async fn resolve(&self, code: &ShortCode) -> Result<UrlRecord> {
        self.repository
            .get(code)
            .await?
            .ok_or_else(|| ShortenerError::NotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::random::RandomGenerator;
    use crate::repository::memory::InMemoryRepository;
    use std::sync::Mutex;

    fn test_service() -> ShortenerService<InMemoryRepository, RandomGenerator> {
        ShortenerService::new(InMemoryRepository::new(), RandomGenerator::new())
    }

    #[tokio::test]
    async fn shorten_then_resolve_roundtrip() {
        let service = test_service();

        let code = service.shorten("http://example.com").await.unwrap();
        assert_eq!(code.as_str().len(), 6);

        let record = service.resolve(&code).await.unwrap();
        assert_eq!(record.original_url, "http://example.com");
    }

    #[tokio::test]
    async fn shorten_invalid_url_fails() {
        let service = test_service();

        let err = service.shorten("not-a-valid-url").await.unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidUrl(_)));

        let err = service.shorten("ftp://example.com").await.unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn resolve_unknown_code_fails() {
        let service = test_service();

        let err = service
            .resolve(&ShortCode::new_unchecked("unknown"))
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::NotFound(_)));
    }

    #[tokio::test]
    async fn same_url_twice_yields_independent_codes() {
        let service = test_service();

        let first = service.shorten("https://example.com").await.unwrap();
        let second = service.shorten("https://example.com").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(
            service.resolve(&first).await.unwrap().original_url,
            "https://example.com"
        );
        assert_eq!(
            service.resolve(&second).await.unwrap().original_url,
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn concurrent_shortens_produce_distinct_codes() {
        use std::collections::HashSet;
        use std::sync::Arc;

        let service = Arc::new(test_service());
        let mut handles = vec![];

        for i in 0..32u64 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                let url = format!("https://example.com/page/{}", i);
                let code = service.shorten(&url).await.unwrap();
                (code, url)
            }));
        }

        let mut codes = HashSet::new();
        for handle in handles {
            let (code, url) = handle.await.unwrap();
            assert!(codes.insert(code.clone()), "duplicate code {}", code);
            assert_eq!(service.resolve(&code).await.unwrap().original_url, url);
        }

        assert_eq!(codes.len(), 32);
    }

    /// Replays a fixed script of codes, repeating the last one forever.
    struct ScriptedGenerator {
        script: Mutex<Vec<&'static str>>,
    }

    impl ScriptedGenerator {
        fn new(mut codes: Vec<&'static str>) -> Self {
            codes.reverse();
            Self {
                script: Mutex::new(codes),
            }
        }
    }

    impl Generator for ScriptedGenerator {
        type Output = ShortCode;

        fn generate(&self) -> ShortCode {
            let mut script = self.script.lock().unwrap();
            let code = if script.len() > 1 {
                script.pop().unwrap()
            } else {
                script.last().unwrap()
            };
            ShortCode::new_unchecked(code)
        }
    }

    #[tokio::test]
    async fn collision_triggers_regeneration() {
        let generator = ScriptedGenerator::new(vec!["aaaaaa", "aaaaaa", "bbbbbb"]);
        let service = ShortenerService::new(InMemoryRepository::new(), generator);

        let first = service.shorten("https://example.com/1").await.unwrap();
        assert_eq!(first.as_str(), "aaaaaa");

        // The second call draws "aaaaaa" again, detects the collision,
        // and settles on the next candidate.
        let second = service.shorten("https://example.com/2").await.unwrap();
        assert_eq!(second.as_str(), "bbbbbb");
    }

    #[tokio::test]
    async fn exhausted_code_space_is_reported() {
        let generator = ScriptedGenerator::new(vec!["cccccc"]);
        let service = ShortenerService::new(InMemoryRepository::new(), generator);

        service.shorten("https://example.com/1").await.unwrap();

        let err = service.shorten("https://example.com/2").await.unwrap_err();
        assert!(matches!(err, ShortenerError::IdSpaceExhausted(_)));
    }
}
