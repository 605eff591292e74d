//! Core value types and date arithmetic.
//!
//! This module holds the data model shared by the engine and its
//! boundary adapters:
//! - Estate facts (the engine's input)
//! - Determinations (the engine's output)
//! - Money, priority ranks and calendar arithmetic
//!
//! Everything here is an immutable value or a pure function.

pub mod clock;
mod determination;
mod facts;
mod money;
mod priority;

pub use determination::{Determination, FilingPath, Timers, Venue};
pub use facts::{
    Applicant, Asset, AssetKind, Decedent, EstateFacts, EstateFlags, InterestedParty,
    WaiverStatus,
};
pub use money::Usd;
pub use priority::{PriorityClass, PriorityTable, Rank, UNRANKED};
