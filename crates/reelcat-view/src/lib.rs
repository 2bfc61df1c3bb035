//! Page data composers for reelcat.
//!
//! Each view has one composer: it derives request parameters from
//! navigation state, fans out the necessary API calls, joins them, and
//! produces a plain view model behind a loading/error/success status.
//! Stale completions (a response for superseded parameters) are discarded.

/// Card view models shared by the grid pages.
pub mod cards;

/// The staleness-aware fetch state machine.
pub mod composer;

/// Page number clamping.
pub mod pagination;

/// One composer per view.
pub mod pages;

pub use composer::{Compose, Composer, FetchStatus, Ticket};
pub use pagination::clamp_page;
