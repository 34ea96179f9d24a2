//! Utility functions for input parsing and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`client_ip`] - Client address resolution from socket and proxy headers
//! - [`date_parser`] - Date parsing and JavaScript-compatible date formatting
//! - [`db_error`] - Classification of database constraint violations
//! - [`url_validator`] - Validation of URLs submitted for shortening

pub mod client_ip;
pub mod date_parser;
pub mod db_error;
pub mod url_validator;
