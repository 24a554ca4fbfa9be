pub mod client;
pub mod fetcher;

pub use client::{HttpResponse, ReqwestTransport, Transport};
pub use fetcher::{FetchPolicy, ResilientFetcher};
