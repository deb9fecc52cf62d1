//! Per-finger feature derivation.
//!
//! A [`Finger`] wraps one finger's 4-point landmark set and derives its geometric features at
//! construction time: length, hand-relative length, an extension flag, and a dominant-axis
//! orientation. All derived fields are pure functions of the landmarks and the construction-time
//! hand context; a finger is never mutated after it is built.

use serde::{Deserialize, Serialize};

use crate::geom::{self, Axis, Position};
use crate::landmark::FingerLandmarks;

/// Identifies one of the five fingers.
///
/// The discriminant order matches the fixed finger order used throughout the crate
/// (Index, Middle, Ring, Pinky, Thumb).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerKind {
    Index,
    Middle,
    Ring,
    Pinky,
    Thumb,
}

/// All finger kinds, in fixed order.
pub const ALL_FINGERS: [FingerKind; 5] = [
    FingerKind::Index,
    FingerKind::Middle,
    FingerKind::Ring,
    FingerKind::Pinky,
    FingerKind::Thumb,
];

impl FingerKind {
    /// Extension threshold for this finger, as a fraction of hand size.
    ///
    /// Empirically tuned constants: a finger whose base→tip span is below this fraction of the
    /// hand size is considered curled regardless of segment alignment.
    pub fn extension_ratio(&self) -> f32 {
        match self {
            FingerKind::Index => 0.14,
            FingerKind::Middle => 0.15,
            FingerKind::Ring => 0.15,
            FingerKind::Pinky => 0.13,
            FingerKind::Thumb => 0.10,
        }
    }

    /// Index of the landmark used as this finger's base.
    ///
    /// The thumb's chain includes the CMC joint at slot 0, which sits inside the palm; its usable
    /// base is the MCP at slot 1. All other fingers use slot 0.
    pub fn base_landmark_index(&self) -> usize {
        match self {
            FingerKind::Thumb => 1,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FingerKind::Index => "Index",
            FingerKind::Middle => "Middle",
            FingerKind::Ring => "Ring",
            FingerKind::Pinky => "Pinky",
            FingerKind::Thumb => "Thumb",
        }
    }
}

impl std::fmt::Display for FingerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finger with its derived features.
#[derive(Debug, Clone, Copy)]
pub struct Finger {
    kind: FingerKind,
    landmarks: FingerLandmarks,
    length: f32,
    relative_length: f32,
    extended: bool,
    orientation: Axis,
    /// Absolute contact distance, resolved from the hand's configured fraction at construction.
    contact_threshold: f32,
}

impl Finger {
    /// Derives a finger from its landmark set and the owning hand's context.
    ///
    /// `hand_size` must be positive (caller-guaranteed; see [`crate::hand::Hand`]).
    pub(crate) fn new(
        kind: FingerKind,
        landmarks: FingerLandmarks,
        hand_size: f32,
        contact_threshold: f32,
    ) -> Self {
        let length = geom::distance(landmarks.get(kind.base_landmark_index()), landmarks.tip());
        let relative_length = length / hand_size;
        // A curled finger either folds its tip back toward the base (short span) or bends the
        // mid-to-tip run out of line; extension requires passing both checks.
        let extended = relative_length > kind.extension_ratio()
            && geom::are_aligned(landmarks.get(1), landmarks.get(2), landmarks.get(3));
        let orientation = geom::orientation(
            landmarks.get(kind.base_landmark_index()),
            landmarks.tip(),
        );

        Finger {
            kind,
            landmarks,
            length,
            relative_length,
            extended,
            orientation,
            contact_threshold,
        }
    }

    #[inline]
    pub fn kind(&self) -> FingerKind {
        self.kind
    }

    #[inline]
    pub fn landmarks(&self) -> &FingerLandmarks {
        &self.landmarks
    }

    /// The fingertip landmark.
    #[inline]
    pub fn tip(&self) -> Position {
        self.landmarks.tip()
    }

    /// The finger's base landmark (see [`FingerKind::base_landmark_index`]).
    #[inline]
    pub fn base(&self) -> Position {
        self.landmarks.get(self.kind.base_landmark_index())
    }

    /// Base→tip Euclidean length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Length normalized by hand size; dimensionless and hand-scale-invariant.
    #[inline]
    pub fn relative_length(&self) -> f32 {
        self.relative_length
    }

    /// Whether the finger is held straight and spans enough of the hand to count as extended.
    #[inline]
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Dominant axis of the base→tip direction.
    #[inline]
    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    /// Returns `true` if this finger's tip is in contact with *any* landmark of `other`.
    pub fn is_touching(&self, other: &Finger) -> bool {
        let tip = self.tip();
        other
            .landmarks
            .iter()
            .any(|lm| geom::are_touching(tip, lm, self.contact_threshold))
    }

    /// Returns `true` if the two fingertips are in contact.
    pub fn is_touching_tip(&self, other: &Finger) -> bool {
        geom::are_touching(self.tip(), other.tip(), self.contact_threshold)
    }

    /// Returns `true` if this finger's tip is in contact with `other`'s base landmark.
    pub fn is_touching_base(&self, other: &Finger) -> bool {
        geom::are_touching(self.tip(), other.base(), self.contact_threshold)
    }

    /// Symmetric contact test: either finger's tip against any landmark of the other.
    ///
    /// This is a superset of [`is_touching`][Self::is_touching],
    /// [`is_touching_tip`][Self::is_touching_tip] and [`is_touching_base`][Self::is_touching_base],
    /// used by the pose matcher's `Any`/`None` contact kinds.
    pub fn is_in_contact_with(&self, other: &Finger) -> bool {
        self.is_touching(other) || other.is_touching(self)
    }

    /// Returns `true` if the fingertip folds back into contact with the finger's own base.
    pub fn is_curled(&self) -> bool {
        geom::are_touching(self.tip(), self.base(), self.contact_threshold)
    }
}
