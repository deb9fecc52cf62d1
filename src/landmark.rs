//! Input contract: hand landmark frames produced by an external tracking model.
//!
//! The core does not perform any detection itself. It expects a complete, already-validated frame
//! per hand: five ordered 4-point finger landmark sets plus a 2D bounding box. Frames either come
//! pre-grouped (the tracking model's per-finger annotations) or are sliced out of the raw ordered
//! 21-landmark array with [`HandFrame::from_landmarks`].

use serde::{Deserialize, Serialize};

use crate::geom::{Position, Position2};

/// Names for the 21 hand landmarks, in the order the tracking model emits them.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks in a raw frame.
pub const NUM_LANDMARKS: usize = 21;

/// The 4 tracked points of one finger, ordered base→tip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FingerLandmarks(pub [Position; 4]);

impl FingerLandmarks {
    /// The fingertip landmark (always the last of the 4 points).
    #[inline]
    pub fn tip(&self) -> Position {
        self.0[3]
    }

    /// Returns the landmark at `index` (0 = base joint, 3 = tip).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..=3`; a finger always has exactly 4 landmarks.
    #[inline]
    pub fn get(&self, index: usize) -> Position {
        self.0[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

/// Axis-aligned 2D bounding box of the hand, reported by the tracking model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub top_left: Position2,
    pub bottom_right: Position2,
}

/// One complete hand landmark frame: five finger landmark sets plus the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandFrame {
    pub thumb: FingerLandmarks,
    pub index_finger: FingerLandmarks,
    pub middle_finger: FingerLandmarks,
    pub ring_finger: FingerLandmarks,
    pub pinky: FingerLandmarks,
    pub bounding_box: BoundingBox,
}

impl HandFrame {
    /// Groups a raw ordered 21-landmark array into per-finger landmark sets.
    ///
    /// Each finger uses the four joints of its chain from knuckle to tip. The thumb's chain starts
    /// at the CMC joint instead, so its set is CMC/MCP/IP/Tip; the wrist landmark is not part of
    /// any finger.
    pub fn from_landmarks(landmarks: &[Position; NUM_LANDMARKS], bounding_box: BoundingBox) -> Self {
        let finger = |start: LandmarkIdx| {
            let start = start as usize;
            FingerLandmarks([
                landmarks[start],
                landmarks[start + 1],
                landmarks[start + 2],
                landmarks[start + 3],
            ])
        };

        HandFrame {
            thumb: finger(LandmarkIdx::ThumbCmc),
            index_finger: finger(LandmarkIdx::IndexFingerMcp),
            middle_finger: finger(LandmarkIdx::MiddleFingerMcp),
            ring_finger: finger(LandmarkIdx::RingFingerMcp),
            pinky: finger(LandmarkIdx::PinkyMcp),
            bounding_box,
        }
    }
}
