//! Application layer: the roster being edited and the submission of the result.
//!
//! `RosterManager` owns the team while it is edited and validated, and
//! `SubmissionDispatcher` takes the finalized registration to the spreadsheet
//! webhook without ever blocking the user on delivery.

pub mod dispatcher;
pub mod roster;
