//! # bfood-api: Ordering Backend Client
//!
//! Typed access to the restaurant ordering REST API.
//!
//! ## Module Organization
//! ```text
//! bfood_api/
//! ├── lib.rs      ◄─── You are here (exports)
//! ├── client.rs   ◄─── MenuApi trait + reqwest-backed ApiClient
//! ├── config.rs   ◄─── ApiConfig (base URL, uploads path, timeout)
//! └── error.rs    ◄─── ClientError
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use bfood_api::{ApiClient, ApiConfig, MenuApi};
//!
//! # async fn demo() -> bfood_api::ClientResult<()> {
//! let client = ApiClient::new(&ApiConfig::default())?;
//! let categories = client.list_categories().await?;
//! println!("{} categories", categories.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, MenuApi};
pub use config::ApiConfig;
pub use error::{ClientError, ClientResult};
