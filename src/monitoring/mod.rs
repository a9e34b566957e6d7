/*!
 * Monitoring Module
 * Subscriber setup for the crate's tracing spans and events
 */

pub mod tracer;

pub use tracer::{init_tracing, TRACE_JSON_ENV};
