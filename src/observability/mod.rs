//! Observability
//!
//! Structured JSON-line logging for the command-line front end. The library
//! modules are pure and do not log; commands log around the calls they make.
//!
//! # Usage
//!
//! ```ignore
//! use suifeatures::observability::{Event, Logger, Severity};
//!
//! let logger = Logger::new(Severity::Info);
//! logger.info(Event::RecordsSorted, &[("field", "age"), ("count", "3")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{format_line, LogSink, Logger, Severity};
