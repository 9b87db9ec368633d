//! snipcheck-util - Shared foundation types
//!
//! Source locations ([`Span`]) and the diagnostic machinery
//! ([`Diagnostic`], [`DiagnosticBuilder`], [`Handler`]) used by the scanner
//! and the command-line front end.
//!
//! Diagnostics are collected, not thrown: a component reports into a
//! [`Handler`] and keeps going, and the caller decides afterwards whether
//! anything it collected matters.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;
