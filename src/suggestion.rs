//! Suggestion lifecycle
//!
//! Owns everything between "the user stopped typing" and "ghost text is on
//! screen": the idle debouncer, the background worker that streams a
//! continuation from the completion endpoint, and the state machine that
//! reconciles streamed chunks against accepts, dismissals, and concurrent
//! edits.

mod debouncer;
mod provider;
mod state;
mod worker;

pub use debouncer::IdleDebouncer;
pub use provider::{CompletionClient, CompletionError, CompletionSource};
pub use state::{CompletionRequest, CompletionResponse, Phase, SuggestionState};
pub use worker::spawn_worker;
