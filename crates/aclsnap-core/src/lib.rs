// aclsnap-core: Fetch one ACL from an EOS device and persist it as JSON.

pub mod config;
pub mod error;
pub mod payload;
pub mod pipeline;
pub mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConnectionConfig, TlsVerification, default_output_path};
pub use error::CoreError;
pub use payload::Payload;
pub use pipeline::{CommandFailure, ExportOutcome, Fetched, Persisted, export, fetch, persist};
pub use session::Session;

pub use aclsnap_api::Scheme;
