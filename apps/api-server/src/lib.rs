//! # Quill API Server
//!
//! Actix-web HTTP server for the blog post resource. Exposed as a library so
//! integration tests can mount the real app in-process.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
