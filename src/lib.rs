//! Callguard: validating call wrappers
//!
//! Wraps an arbitrary callable with pre-call input validation, post-call
//! result validation, a bounded retry budget, and an optional fallback
//! action invoked when every attempt fails.

pub mod guard;
