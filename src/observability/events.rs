//! Observable translation events

use std::fmt;

use super::logger::Severity;

/// Events emitted while configuring mappings and translating predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Mapping configuration file loaded
    MappingLoaded,
    /// Unregistered member path rendered as its raw path
    MemberUnmapped,
    /// Predicate call rewritten by the macro expander
    PredicateExpanded,
    /// Predicate rendered to SQL
    PredicateTranslated,
    /// Translation failed
    PredicateRejected,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::MappingLoaded => "MAPPING_LOADED",
            Event::MemberUnmapped => "MEMBER_UNMAPPED",
            Event::PredicateExpanded => "PREDICATE_EXPANDED",
            Event::PredicateTranslated => "PREDICATE_TRANSLATED",
            Event::PredicateRejected => "PREDICATE_REJECTED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::MappingLoaded => Severity::Info,
            Event::MemberUnmapped | Event::PredicateRejected => Severity::Warn,
            Event::PredicateExpanded | Event::PredicateTranslated => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
