//! Observable events
//!
//! Every log line names one of these. Events are explicit and typed.

use std::fmt;

/// Observable events in a showcase run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// A command begins
    CommandStart,
    /// A command finished and wrote its response
    CommandComplete,
    /// A command failed
    CommandFailed,

    // Configuration
    /// Configuration loaded (or defaults chosen)
    ConfigLoaded,

    // Showcases
    /// Dynamic members looked up
    MemberLookup,
    /// A lookup asked for a member the record does not have
    MemberMissing,
    /// Records sorted by a field
    RecordsSorted,
    /// Shape created behind its abstract interface
    ShapeCreated,
    /// A value was assigned through a transforming setter
    NameAssigned,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::CommandStart => "COMMAND_BEGIN",
            Event::CommandComplete => "COMMAND_COMPLETE",
            Event::CommandFailed => "COMMAND_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::MemberLookup => "MEMBER_LOOKUP",
            Event::MemberMissing => "MEMBER_MISSING",
            Event::RecordsSorted => "RECORDS_SORTED",
            Event::ShapeCreated => "SHAPE_CREATED",
            Event::NameAssigned => "NAME_ASSIGNED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::CommandFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
