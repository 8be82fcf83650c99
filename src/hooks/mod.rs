//! Build-step events for jslint.
//!
//! This module handles:
//! - The event contract (step name and payload) jslint reacts to
//! - Dispatching an event to setup or file-list linting

pub mod events;

pub use events::{
	FRONTEND_REQS_STEP, HookEvent, HookOutcome, PRE_COMMIT_STEP, dispatch_event,
};
