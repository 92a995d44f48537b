//! Typed client for the MediaWiki Action API `allpages` and
//! `allcategories` list modules.
//!
//! Each listing call performs exactly one HTTP round trip and returns one
//! page of results. The server hands back a continuation token when more
//! results exist; following it is the caller's job. The usual pattern for
//! enumerating everything between two titles:
//!
//! ```no_run
//! use wikilist::client::Client;
//! use wikilist::constants::DEFAULT_ENDPOINT;
//! use wikilist::pages::AllPagesRequest;
//!
//! # async fn run() -> wikilist::error::Result<()> {
//! let client = Client::new(DEFAULT_ENDPOINT)?;
//! let mut request = AllPagesRequest {
//!     from: Some("A".to_string()),
//!     to: Some("B".to_string()),
//!     limit: Some(200),
//!     ..Default::default()
//! };
//!
//! let mut titles = Vec::new();
//! loop {
//!     let page = client.list_all_pages(&request).await?;
//!     titles.extend(page.items.into_iter().map(|p| p.title));
//!     match page.continuation {
//!         Some(token) => request.continue_token = Some(token),
//!         None => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod pages;
pub mod types;
