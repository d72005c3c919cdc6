//! Custom request extractors.

mod required_json;

pub use required_json::RequiredJson;
