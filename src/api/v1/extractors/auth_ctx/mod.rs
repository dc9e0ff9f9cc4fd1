/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - Give handlers the authorization context of the verified request
 * - Keep the axum wiring in `core`; the context type itself lives in
 *   `types` so the access middleware can build it without extractor
 *   imports
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
