//! Hand-level aggregation: builds the five fingers from one landmark frame and derives hand size
//! and orientation.

use log::debug;

use crate::finger::{Finger, FingerKind, ALL_FINGERS};
use crate::geom::{self, Axis};
use crate::landmark::HandFrame;
use crate::Error;

/// Classification tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandConfig {
    /// Contact distance as a fraction of hand size.
    ///
    /// Two points are "in contact" when their distance is below `contact_threshold * hand size`.
    /// The default of 0.16 reproduces the legacy absolute 40-unit threshold at a reference hand
    /// size of 250 units, while keeping contact verdicts independent of camera distance.
    pub contact_threshold: f32,
}

impl Default for HandConfig {
    fn default() -> Self {
        HandConfig {
            contact_threshold: 0.16,
        }
    }
}

/// One hand with its derived features, constructed atomically from a single landmark frame.
#[derive(Debug, Clone)]
pub struct Hand {
    size: f32,
    fingers: [Finger; 5],
    orientation: Axis,
}

impl Hand {
    /// Builds a hand from a landmark frame using the default [`HandConfig`].
    pub fn new(frame: &HandFrame) -> Self {
        Self::with_config(frame, HandConfig::default())
    }

    /// Builds a hand from a landmark frame.
    ///
    /// All five fingers are derived eagerly; the hand is never partially populated. The frame's
    /// bounding box must be non-degenerate (hand size > 0); this is part of the input contract
    /// with the tracking model and is not checked here.
    pub fn with_config(frame: &HandFrame, config: HandConfig) -> Self {
        let size = geom::distance2d(frame.bounding_box.bottom_right, frame.bounding_box.top_left);
        let contact_threshold = config.contact_threshold * size;

        let landmarks = |kind| match kind {
            FingerKind::Index => frame.index_finger,
            FingerKind::Middle => frame.middle_finger,
            FingerKind::Ring => frame.ring_finger,
            FingerKind::Pinky => frame.pinky,
            FingerKind::Thumb => frame.thumb,
        };
        let fingers =
            ALL_FINGERS.map(|kind| Finger::new(kind, landmarks(kind), size, contact_threshold));

        // Index knuckle to pinky knuckle: a coarse proxy for how the hand is held.
        let orientation = geom::orientation(fingers[0].base(), fingers[3].base());

        debug!(
            "hand: size={size:.1} orientation={orientation} contact_threshold={contact_threshold:.1}"
        );

        Hand {
            size,
            fingers,
            orientation,
        }
    }

    /// Distance between the bounding-box corners; the scale normalizer for all fingers.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Dominant axis between the Index and Pinky finger bases.
    #[inline]
    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    /// Returns a finger by 1-based index: 1=Index, 2=Middle, 3=Ring, 4=Pinky, 5=Thumb.
    ///
    /// An index outside `1..=5` is a caller contract violation and fails with
    /// [`Error::InvalidArgument`].
    pub fn finger(&self, index: usize) -> Result<&Finger, Error> {
        match index {
            1..=5 => Ok(&self.fingers[index - 1]),
            _ => Err(Error::InvalidArgument(format!(
                "finger index {index} out of range (expected 1..=5)"
            ))),
        }
    }

    /// Returns the finger of the given kind.
    pub fn finger_of(&self, kind: FingerKind) -> &Finger {
        &self.fingers[kind as usize]
    }

    /// All five fingers, in fixed order (Index, Middle, Ring, Pinky, Thumb).
    pub fn fingers(&self) -> impl Iterator<Item = &Finger> {
        self.fingers.iter()
    }

    /// AND-reduction: returns `true` iff `predicate` holds for every listed finger.
    ///
    /// Indices are 1-based and cover the full `1..=5` range including the thumb. (A legacy
    /// variant of this reduction silently skipped index 5; that behavior is not reproduced.)
    pub fn all<F>(&self, indices: &[usize], predicate: F) -> Result<bool, Error>
    where
        F: Fn(&Finger) -> bool,
    {
        for &index in indices {
            if !predicate(self.finger(index)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
