//! Papla Adapter - HTTP API 客户端实现

mod http_papla_client;

pub use http_papla_client::{
    HttpPaplaClient, HttpPaplaClientConfig, API_KEY_HEADER, DEFAULT_BASE_URL,
};
