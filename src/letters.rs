//! The fingerspelling letter rule table.
//!
//! Each letter A–U maps to one declarative [`PoseRule`]; [`classify`] evaluates the whole table
//! against a hand and returns the full boolean match vector. The rules are independent and
//! order-insensitive: several letters can match the same ambiguous hand shape, and no attempt is
//! made to pick a single best guess. Disambiguation belongs to the caller.
//!
//! Letters that differ only by motion (J is I with a traced hook, Z draws the letter in the air)
//! are matched by their static handshape; this crate classifies each frame independently.

use once_cell::sync::Lazy;

use crate::geom::Axis;
use crate::hand::Hand;
use crate::pose::{ContactKind, ContactRule, FingerRule, PoseRule};
use crate::Error;
use crate::finger::FingerKind::{self, Index, Middle, Pinky, Ring, Thumb};

/// A fingerspelling letter this crate can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Letter {
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U,
}

/// All recognizable letters, in alphabetical order.
#[rustfmt::skip]
pub const ALL_LETTERS: [Letter; 21] = [
    Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F, Letter::G,
    Letter::H, Letter::I, Letter::J, Letter::K, Letter::L, Letter::M, Letter::N,
    Letter::O, Letter::P, Letter::Q, Letter::R, Letter::S, Letter::T, Letter::U,
];

impl Letter {
    pub fn as_char(&self) -> char {
        (b'A' + *self as u8) as char
    }

    /// The declarative rule for this letter's handshape.
    pub fn rule(&self) -> &'static PoseRule {
        &RULES[*self as usize]
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The boolean match vector produced by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMatches {
    matches: [bool; 21],
}

impl LetterMatches {
    /// Whether the given letter's rule matched.
    pub fn get(&self, letter: Letter) -> bool {
        self.matches[letter as usize]
    }

    /// All letters with their match verdicts, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, bool)> + '_ {
        ALL_LETTERS.iter().map(|&l| (l, self.get(l)))
    }

    /// Only the letters whose rules matched.
    pub fn matched(&self) -> impl Iterator<Item = Letter> + '_ {
        self.iter().filter(|&(_, hit)| hit).map(|(l, _)| l)
    }
}

/// Evaluates every letter rule against `hand`.
pub fn classify(hand: &Hand) -> Result<LetterMatches, Error> {
    let mut matches = [false; 21];
    for letter in ALL_LETTERS {
        matches[letter as usize] = letter.rule().matches(hand)?;
    }
    Ok(LetterMatches { matches })
}

fn ext(expect: bool) -> FingerRule {
    FingerRule::extended(expect)
}

fn no_contact(a: FingerKind, b: FingerKind) -> ContactRule {
    ContactRule::new((a, ContactKind::None), (b, ContactKind::None))
}

fn tip_tip(a: FingerKind, b: FingerKind) -> ContactRule {
    ContactRule::new((a, ContactKind::Tip), (b, ContactKind::Tip))
}

fn tip_base(a: FingerKind, b: FingerKind) -> ContactRule {
    ContactRule::new((a, ContactKind::Tip), (b, ContactKind::Base))
}

fn tip_any(a: FingerKind, b: FingerKind) -> ContactRule {
    ContactRule::new((a, ContactKind::Tip), (b, ContactKind::Any))
}

static RULES: Lazy<[PoseRule; 21]> = Lazy::new(|| {
    [
        // A: fist with the thumb upright at the side, clear of the fingers.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(true))
            .with_contact_any(vec![no_contact(Thumb, Index)])
            .with_contact_any(vec![no_contact(Thumb, Middle)])
            .with_contact_any(vec![no_contact(Thumb, Ring)])
            .with_contact_any(vec![no_contact(Thumb, Pinky)]),
        // B: four fingers straight up, thumb folded across to the ring or pinky knuckle and
        // clear of the index and middle. The ring and pinky stay unconstrained, since the
        // required base contact rules out a no-contact demand on them.
        PoseRule::new()
            .with_finger(Index, ext(true))
            .with_finger(Middle, ext(true))
            .with_finger(Ring, ext(true))
            .with_finger(Pinky, ext(true))
            .with_contact_any(vec![tip_base(Thumb, Ring), tip_base(Thumb, Pinky)])
            .with_contact_any(vec![no_contact(Thumb, Index)])
            .with_contact_any(vec![no_contact(Thumb, Middle)]),
        // C: open curve; no finger folds back on itself and the thumb stays clear.
        PoseRule::new()
            .with_finger(Index, FingerRule::default().with_curled(false))
            .with_finger(Middle, FingerRule::default().with_curled(false))
            .with_finger(Ring, FingerRule::default().with_curled(false))
            .with_finger(Pinky, FingerRule::default().with_curled(false))
            .with_contact_any(vec![no_contact(Thumb, Index)])
            .with_contact_any(vec![no_contact(Thumb, Middle)])
            .with_contact_any(vec![no_contact(Thumb, Ring)])
            .with_contact_any(vec![no_contact(Thumb, Pinky)]),
        // D: index up, thumb pressed against the curled middle and ring fingers.
        PoseRule::new()
            .with_finger(Index, ext(true))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_contact_any(vec![tip_any(Thumb, Middle)])
            .with_contact_any(vec![tip_any(Thumb, Ring)]),
        // E: fingers curled down onto the thumb.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_contact_any(vec![tip_any(Middle, Thumb)])
            .with_contact_any(vec![tip_any(Ring, Thumb)])
            .with_contact_any(vec![tip_any(Pinky, Thumb)])
            .with_contact_any(vec![tip_tip(Thumb, Ring), tip_tip(Thumb, Pinky)]),
        // F: thumb and index form a ring, the other three fingers stand up.
        PoseRule::new()
            .with_finger(Middle, ext(true))
            .with_finger(Ring, ext(true))
            .with_finger(Pinky, ext(true))
            .with_contact_any(vec![tip_tip(Thumb, Index)]),
        // G: index and thumb extended sideways, rest closed.
        PoseRule::new()
            .with_finger(Index, ext(true).with_orientation(Axis::X))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(true).with_orientation(Axis::X)),
        // H: index and middle extended sideways together, rest closed.
        PoseRule::new()
            .with_finger(Index, ext(true).with_orientation(Axis::X))
            .with_finger(Middle, ext(true).with_orientation(Axis::X))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false)),
        // I: pinky upright, other fingers closed.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(true).with_orientation(Axis::Y)),
        // J: the static I-handshape held sideways (the hook motion is out of scope).
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(true).with_orientation(Axis::X)),
        // K: index and middle up with the thumb wedged between them, reaching both knuckles.
        PoseRule::new()
            .with_finger(Index, ext(true))
            .with_finger(Middle, ext(true))
            .with_finger(Thumb, ext(true))
            .with_contact_any(vec![tip_base(Thumb, Index)])
            .with_contact_any(vec![tip_base(Thumb, Middle)]),
        // L: index up, thumb out to the side, clear of each other.
        PoseRule::new()
            .with_finger(Index, ext(true).with_orientation(Axis::Y))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(true).with_orientation(Axis::X))
            .with_contact_any(vec![no_contact(Thumb, Index)]),
        // M: fist with the thumb tucked under three fingers, reaching the ring finger.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(false))
            .with_contact_any(vec![tip_any(Thumb, Ring)]),
        // N: like M with the thumb under two fingers, reaching the middle finger.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(false))
            .with_contact_any(vec![tip_any(Thumb, Middle)]),
        // O: fingertips curve round to meet the thumb.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_contact_any(vec![tip_tip(Thumb, Index)])
            .with_contact_any(vec![tip_any(Thumb, Middle)]),
        // P: the K-handshape tipped over, middle finger pointing down.
        PoseRule::new()
            .with_finger(Index, ext(true).with_orientation(Axis::X))
            .with_finger(Middle, ext(true).with_orientation(Axis::Y))
            .with_finger(Thumb, ext(true))
            .with_contact_any(vec![tip_base(Thumb, Index)])
            .with_contact_any(vec![tip_base(Thumb, Middle)]),
        // Q: the G-handshape pointing down.
        PoseRule::new()
            .with_finger(Index, ext(true).with_orientation(Axis::Y))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(true).with_orientation(Axis::Y)),
        // R: index and middle extended and pressed together (the cross itself is below the
        // resolution of a dominant-axis model).
        PoseRule::new()
            .with_finger(Index, ext(true))
            .with_finger(Middle, ext(true))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(false))
            .with_contact_any(vec![tip_tip(Index, Middle)]),
        // S: fist with the thumb closed across the front of index and middle.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(false))
            .with_contact_any(vec![tip_any(Thumb, Index)])
            .with_contact_any(vec![tip_any(Thumb, Middle)]),
        // T: fist with the thumb poking up between index and middle, at the index knuckle.
        PoseRule::new()
            .with_finger(Index, ext(false))
            .with_finger(Middle, ext(false))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_contact_any(vec![tip_base(Thumb, Index)]),
        // U: index and middle upright side by side, thumb folded in.
        PoseRule::new()
            .with_finger(Index, ext(true).with_orientation(Axis::Y))
            .with_finger(Middle, ext(true).with_orientation(Axis::Y))
            .with_finger(Ring, ext(false))
            .with_finger(Pinky, ext(false))
            .with_finger(Thumb, ext(false))
            .with_contact_any(vec![tip_tip(Index, Middle)]),
    ]
});
