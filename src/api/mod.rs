pub mod backend;
pub mod client;

pub use backend::{ItemApi, RemoteError};
pub use client::HttpItemApi;
