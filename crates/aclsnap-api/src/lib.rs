// aclsnap-api: Async Rust client for the Arista EOS command API (eAPI)

pub mod eapi;
pub mod error;
pub mod transport;

pub use eapi::{Command, CommandResponse, Credentials, EapiClient, Encoding};
pub use error::Error;
pub use transport::{Scheme, TlsMode, TransportConfig};
