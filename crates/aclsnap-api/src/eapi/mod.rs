// eAPI client modules
//
// Hand-written client for the EOS command API: a single JSON-RPC 2.0
// method (`runCmds`) posted to `/command-api` with HTTP basic auth.

pub mod client;
pub mod models;

pub use client::{Credentials, EapiClient};
pub use models::{Command, CommandResponse, Encoding};
