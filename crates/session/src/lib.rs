//! ClauseLens Session
//!
//! The in-memory state machine for one document session: Empty → Analyzing →
//! Ready → Empty on reset. Owns the single document, the single analysis
//! result, and the growing chat transcript; every mutation goes through the
//! transition methods on [`Session`], which enforce the in-flight guards and
//! the stale-response guard.

pub mod session;
pub mod state;

// Re-export main types
pub use session::{Session, SessionLimits, CHAT_FALLBACK_ANSWER};
pub use state::{SessionPhase, SessionSnapshot, SessionView};
