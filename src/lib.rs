//! Static fingerspelling pose classification from 3D hand landmarks.
//!
//! This crate consumes the 21-point hand skeleton produced by an external hand-tracking model
//! (MediaPipe hand landmark convention) and derives per-finger and per-hand geometric features:
//! finger length, hand-relative length, an extension flag, and a coarse dominant-axis orientation.
//! A declarative pose matcher ([`pose::PoseRule`]) evaluates a [`hand::Hand`] against a structured
//! expectation, and [`letters::classify`] runs the built-in rule table for the fingerspelling
//! letters A through U, yielding the full boolean match vector.
//!
//! # Coordinates
//!
//! Landmark positions use the tracking model's image coordinate system: X points right, Y points
//! *down* (image convention), and Z is relative depth. All distances are in the same units as the
//! input coordinates (typically pixels). Contact thresholds are expressed as a fraction of the
//! overall hand size so that classification does not depend on how far the hand is from the
//! camera.
//!
//! # Classification is ambiguous by design
//!
//! Each letter rule is an independent predicate; several letters can match the same hand shape.
//! The crate reports the complete match vector and leaves disambiguation to the caller.

use log::LevelFilter;

pub mod finger;
pub mod geom;
pub mod hand;
pub mod landmark;
pub mod letters;
pub mod pose;
pub mod report;


/// Errors reported by this crate.
///
/// Every error here is a deterministic function of the inputs and signals API misuse; there is no
/// transient or retryable class.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A caller-contract violation, such as a finger index outside `1..=5`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A pose rule violates the structural constraints of the matcher (same finger on both sides
    /// of a contact, base-to-base contact, malformed `Any` pairing). This reflects a programming
    /// error in the pose definition, not bad input data.
    #[error("invalid pose configuration: {0}")]
    InvalidConfiguration(String),
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and fingerspell will log at *debug* level. If a global logger is already
/// registered, this macro does nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
