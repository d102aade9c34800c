//! wwwserve - static file server
//!
//! Answers GET requests with files from a content root, one connection at a
//! time.

pub mod config;
pub mod http;
pub mod server;
pub mod site;
