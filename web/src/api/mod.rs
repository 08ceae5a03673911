//! Remote analysis service client

mod client;

pub use client::ApiClient;
