//! Declarative pose matching.
//!
//! A [`PoseRule`] is a structured expectation a [`Hand`] can be checked against: an optional
//! hand-orientation constraint, optional per-finger constraints (extension, orientation, curl),
//! and pairwise finger-contact constraints. Rules are plain data and derive the [`serde`] traits,
//! so pose definitions can live in configuration. A rule is constructed once, then evaluated
//! against any number of hands. Evaluation is a single-shot pure function with no state.
//!
//! Structural problems in a rule (the same finger on both sides of a contact, a base-to-base
//! contact, a malformed `Any` pairing) are programming errors in the pose definition and surface
//! as [`Error::InvalidConfiguration`] during evaluation of the offending constraint, before any
//! geometry is consulted.

use serde::{Deserialize, Serialize};

use crate::finger::{Finger, FingerKind};
use crate::geom::Axis;
use crate::hand::Hand;
use crate::Error;

/// What part of a finger participates in a contact constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// The fingers must not be in contact at all.
    None,
    /// The finger's base landmark.
    Base,
    /// The fingertip.
    Tip,
    /// Any landmark of the finger.
    Any,
}

/// A pairwise finger-contact constraint.
///
/// The two sides are distinct slots. (The implementation this crate replaces read the first slot
/// for both sides, which made its same-finger validation trip on every constraint; that defect is
/// not reproduced.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRule {
    pub a: (FingerKind, ContactKind),
    pub b: (FingerKind, ContactKind),
}

impl ContactRule {
    pub fn new(a: (FingerKind, ContactKind), b: (FingerKind, ContactKind)) -> Self {
        ContactRule { a, b }
    }

    /// Evaluates this constraint against `hand`.
    ///
    /// Structural validation runs first and fails with [`Error::InvalidConfiguration`] before any
    /// geometric test.
    pub fn matches(&self, hand: &Hand) -> Result<bool, Error> {
        let (finger_a, kind_a) = self.a;
        let (finger_b, kind_b) = self.b;

        if finger_a == finger_b {
            return Err(Error::InvalidConfiguration(format!(
                "contact rule references the same finger ({finger_a}) on both sides"
            )));
        }
        if kind_a == ContactKind::Base && kind_b == ContactKind::Base {
            return Err(Error::InvalidConfiguration(
                "base-to-base contact is ambiguous".into(),
            ));
        }

        let a = hand.finger_of(finger_a);
        let b = hand.finger_of(finger_b);

        use ContactKind::*;
        match (kind_a, kind_b) {
            (Tip, other) => tip_contact(a, b, other),
            (other, Tip) => tip_contact(b, a, other),
            // Neither side is a tip: a `none` side demands no contact at all.
            (None, _) | (_, None) => Ok(!a.is_in_contact_with(b)),
            (Any, Any) => Ok(a.is_in_contact_with(b)),
            (Any, _) | (_, Any) => Err(Error::InvalidConfiguration(
                "`any` may only be paired with `any`, `none`, or `tip`".into(),
            )),
            // Only (Base, Base) remains, rejected above; kept for exhaustiveness.
            _ => Err(Error::InvalidConfiguration(
                "no contact rule matched".into(),
            )),
        }
    }
}

/// Resolves a contact where one side is a fingertip.
fn tip_contact(tip_finger: &Finger, other: &Finger, kind: ContactKind) -> Result<bool, Error> {
    match kind {
        ContactKind::Any => Ok(tip_finger.is_touching(other)),
        ContactKind::Base => Ok(tip_finger.is_touching_base(other)),
        ContactKind::Tip => Ok(tip_finger.is_touching_tip(other)),
        ContactKind::None => Err(Error::InvalidConfiguration(
            "a tip contact cannot be paired with `none`".into(),
        )),
    }
}

/// One or more alternative contact rules; the group passes when any alternative passes.
///
/// All alternatives are validated even after one passes, so a structurally invalid alternative
/// never hides behind a passing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactGroup(pub Vec<ContactRule>);

impl ContactGroup {
    pub fn matches(&self, hand: &Hand) -> Result<bool, Error> {
        if self.0.is_empty() {
            return Err(Error::InvalidConfiguration(
                "empty contact group can never match".into(),
            ));
        }
        let mut any = false;
        for rule in &self.0 {
            if rule.matches(hand)? {
                any = true;
            }
        }
        Ok(any)
    }
}

/// Constraints on a single finger. Unset attributes always pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerRule {
    #[serde(default)]
    pub extended: Option<bool>,
    #[serde(default)]
    pub orientation: Option<Axis>,
    #[serde(default)]
    pub curled: Option<bool>,
}

impl FingerRule {
    /// A rule constraining only the extension flag.
    pub fn extended(expect: bool) -> Self {
        FingerRule {
            extended: Some(expect),
            ..Default::default()
        }
    }

    pub fn with_orientation(mut self, axis: Axis) -> Self {
        self.orientation = Some(axis);
        self
    }

    pub fn with_curled(mut self, curled: bool) -> Self {
        self.curled = Some(curled);
        self
    }

    fn matches(&self, finger: &Finger) -> bool {
        check(finger.is_extended(), self.extended)
            && check(finger.orientation(), self.orientation)
            && check(finger.is_curled(), self.curled)
    }
}

fn check<T: PartialEq>(value: T, expectation: Option<T>) -> bool {
    match expectation {
        Some(expected) => value == expected,
        None => true,
    }
}

/// A declarative pose expectation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseRule {
    #[serde(default)]
    pub hand_orientation: Option<Axis>,
    /// Per-finger constraints, indexed in fixed finger order (Index … Thumb).
    #[serde(default)]
    pub fingers: [Option<FingerRule>; 5],
    #[serde(default)]
    pub contacts: Vec<ContactGroup>,
}

impl PoseRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hand_orientation(mut self, axis: Axis) -> Self {
        self.hand_orientation = Some(axis);
        self
    }

    pub fn with_finger(mut self, kind: FingerKind, rule: FingerRule) -> Self {
        self.fingers[kind as usize] = Some(rule);
        self
    }

    /// Adds a single mandatory contact constraint.
    pub fn with_contact(self, a: (FingerKind, ContactKind), b: (FingerKind, ContactKind)) -> Self {
        self.with_contact_any(vec![ContactRule::new(a, b)])
    }

    /// Adds a group of alternative contact constraints; the group passes when any of them does.
    pub fn with_contact_any(mut self, alternatives: Vec<ContactRule>) -> Self {
        self.contacts.push(ContactGroup(alternatives));
        self
    }

    /// Evaluates the rule against `hand`.
    ///
    /// Checks the hand-orientation constraint, then each constrained finger, then each contact
    /// group, short-circuiting false on the first failing predicate. Unconstrained attributes
    /// always pass, so the empty rule matches every hand.
    pub fn matches(&self, hand: &Hand) -> Result<bool, Error> {
        if !check(hand.orientation(), self.hand_orientation) {
            return Ok(false);
        }

        for (slot, rule) in self.fingers.iter().enumerate() {
            let Some(rule) = rule else { continue };
            // Slot order is the fixed finger order, so slot N is 1-based finger N+1.
            if !rule.matches(hand.finger(slot + 1)?) {
                return Ok(false);
            }
        }

        for group in &self.contacts {
            if !group.matches(hand)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test;
    use ContactKind::{Any, Base, None as NoContact, Tip};
    use FingerKind::{Index, Middle, Pinky, Ring, Thumb};

    #[test]
    fn empty_rule_matches_everything() {
        let hand = test::open_hand();
        assert!(PoseRule::new().matches(&hand).unwrap());
    }

    #[test]
    fn same_finger_contact_is_rejected_before_geometry() {
        let hand = test::open_hand();
        let rule = PoseRule::new().with_contact((Thumb, Tip), (Thumb, Tip));
        assert!(matches!(
            rule.matches(&hand),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn distinct_slots() {
        // Regression for the legacy defect that read one slot for both sides: a rule naming two
        // different fingers must not trip the same-finger validation.
        let hand = test::open_hand();
        let rule = PoseRule::new().with_contact((Thumb, Tip), (Index, Tip));
        assert!(rule.matches(&hand).is_ok());
    }

    #[test]
    fn base_to_base_is_rejected() {
        let hand = test::open_hand();
        let rule = PoseRule::new().with_contact((Index, Base), (Middle, Base));
        assert!(matches!(
            rule.matches(&hand),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn any_pairs_only_with_any_none_or_tip() {
        let hand = test::open_hand();
        let bad = PoseRule::new().with_contact((Index, Any), (Middle, Base));
        assert!(matches!(
            bad.matches(&hand),
            Err(Error::InvalidConfiguration(_))
        ));

        let ok = PoseRule::new().with_contact((Index, Any), (Middle, Any));
        assert!(ok.matches(&hand).is_ok());
    }

    #[test]
    fn tip_cannot_pair_with_none() {
        // Tip resolution takes precedence over the `none` clause, and a tip contact has no
        // meaningful `none` counterpart.
        let hand = test::open_hand();
        let rule = PoseRule::new().with_contact((Index, Tip), (Middle, NoContact));
        assert!(matches!(
            rule.matches(&hand),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_contact_group_is_rejected() {
        let hand = test::open_hand();
        let rule = PoseRule::new().with_contact_any(vec![]);
        assert!(matches!(
            rule.matches(&hand),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn none_contact_means_no_contact_at_all() {
        // In the open test hand the thumb is far from the pinky but index and middle are adjacent.
        let hand = test::open_hand();
        let apart = PoseRule::new().with_contact((Thumb, NoContact), (Pinky, NoContact));
        assert!(apart.matches(&hand).unwrap());

        let together = PoseRule::new().with_contact((Index, NoContact), (Middle, NoContact));
        assert!(!together.matches(&hand).unwrap());
    }

    #[test]
    fn tip_contact_resolution() {
        let hand = test::open_hand();
        // Adjacent fingers touch tip-to-tip in the open test hand.
        let tips = PoseRule::new().with_contact((Index, Tip), (Middle, Tip));
        assert!(tips.matches(&hand).unwrap());
        // But no fingertip reaches another finger's base.
        let tip_base = PoseRule::new().with_contact((Index, Tip), (Middle, Base));
        assert!(!tip_base.matches(&hand).unwrap());
    }

    #[test]
    fn finger_constraints_short_circuit() {
        let hand = test::open_hand();
        let rule = PoseRule::new()
            .with_finger(Index, FingerRule::extended(true))
            .with_finger(Ring, FingerRule::extended(false));
        // Every finger of the open hand is extended, so the ring constraint fails.
        assert!(!rule.matches(&hand).unwrap());
    }

    #[test]
    fn hand_orientation_constraint() {
        let hand = test::open_hand();
        assert!(PoseRule::new()
            .with_hand_orientation(crate::geom::Axis::X)
            .matches(&hand)
            .unwrap());
        assert!(!PoseRule::new()
            .with_hand_orientation(crate::geom::Axis::Z)
            .matches(&hand)
            .unwrap());
    }

    #[test]
    fn rules_deserialize_from_json() {
        let json = r#"{
            "hand_orientation": "x",
            "fingers": [{ "extended": true, "orientation": "y" }, null, null, null, null],
            "contacts": [[{ "a": ["thumb", "tip"], "b": ["index", "tip"] }]]
        }"#;
        let rule: PoseRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.hand_orientation, Some(crate::geom::Axis::X));
        assert_eq!(
            rule.fingers[0],
            Some(FingerRule::extended(true).with_orientation(crate::geom::Axis::Y))
        );
        assert_eq!(
            rule.contacts[0].0[0],
            ContactRule::new((Thumb, Tip), (Index, Tip))
        );
    }
}
