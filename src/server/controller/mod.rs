//! HTTP request handlers.
//!
//! Controllers extract and validate request input, convert DTOs into server
//! parameter models, call the service layer and convert the results back into DTOs.

pub mod coffee;
