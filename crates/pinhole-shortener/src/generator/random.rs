use crate::generator::Generator;
use base64::Engine as _;
use pinhole_core::ShortCode;
use rand_core::{OsRng, TryRngCore};

/// Number of random bytes per code; encodes to 6 base64url characters.
const CODE_BYTES: usize = 4;

/// Generates short codes from a cryptographically secure random source.
///
/// Draws 4 bytes from the operating system RNG and encodes them as
/// URL-safe base64 without padding, yielding a 6-character code. The
/// 2^32 code space makes collisions rare at small scale, but callers
/// must still check the store and regenerate on collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut buf = [0u8; CODE_BYTES];
        // `Generator` is intentionally infallible. The OS RNG failing to
        // produce bytes is an unrecoverable environment problem.
        OsRng.try_fill_bytes(&mut buf).expect("OsRng failed");
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf);
        ShortCode::new_unchecked(encoded)
    }
}
