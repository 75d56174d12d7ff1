//! HTTP wire types
//!
//! This module provides the request and response types used by the handlers,
//! including incremental request parsing from a socket and response encoding.

pub mod request;
pub mod response;


pub use request::Request;
pub use response::Response;
