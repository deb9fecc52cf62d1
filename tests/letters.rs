//! End-to-end classification scenarios on synthetic landmark frames.
//!
//! All frames use a 150×200 bounding box (hand size 250), so the default contact threshold
//! resolves to 40 units.

use fingerspell::hand::{Hand, HandConfig};
use fingerspell::landmark::{BoundingBox, FingerLandmarks, HandFrame};
use fingerspell::letters::{classify, Letter};

fn bounding_box() -> BoundingBox {
    BoundingBox {
        top_left: [0.0, 0.0],
        bottom_right: [150.0, 200.0],
    }
}

/// A short folded finger at `x`: collinear, spanning only 30 units (12% of the hand, below every
/// extension threshold).
fn folded(x: f32) -> FingerLandmarks {
    FingerLandmarks([
        [x, 100.0, 0.0],
        [x, 110.0, 0.0],
        [x, 120.0, 0.0],
        [x, 130.0, 0.0],
    ])
}

/// The letter-A handshape: four folded fingers, thumb straight and well clear of all of them.
fn letter_a_frame() -> HandFrame {
    HandFrame {
        thumb: FingerLandmarks([
            [0.0, 100.0, 0.0],
            [0.0, 90.0, 0.0],
            [0.0, 60.0, 0.0],
            [0.0, 30.0, 0.0],
        ]),
        index_finger: folded(100.0),
        middle_finger: folded(120.0),
        ring_finger: folded(140.0),
        pinky: folded(160.0),
        bounding_box: bounding_box(),
    }
}

fn scaled(frame: &HandFrame, s: f32) -> HandFrame {
    let scale_finger = |f: &FingerLandmarks| {
        let mut out = *f;
        for p in &mut out.0 {
            p[0] *= s;
            p[1] *= s;
            p[2] *= s;
        }
        out
    };
    HandFrame {
        thumb: scale_finger(&frame.thumb),
        index_finger: scale_finger(&frame.index_finger),
        middle_finger: scale_finger(&frame.middle_finger),
        ring_finger: scale_finger(&frame.ring_finger),
        pinky: scale_finger(&frame.pinky),
        bounding_box: BoundingBox {
            top_left: [frame.bounding_box.top_left[0] * s, frame.bounding_box.top_left[1] * s],
            bottom_right: [
                frame.bounding_box.bottom_right[0] * s,
                frame.bounding_box.bottom_right[1] * s,
            ],
        },
    }
}

#[test]
fn letter_a_matches_the_a_handshape() {
    let hand = Hand::new(&letter_a_frame());

    // Preconditions of the scenario: thumb extended, all other fingers below threshold.
    assert!(hand.finger(5).unwrap().is_extended());
    for i in 1..=4 {
        assert!(!hand.finger(i).unwrap().is_extended());
    }

    let matches = classify(&hand).unwrap();
    assert!(matches.get(Letter::A));
}

#[test]
fn letter_a_rejected_when_thumb_touches_index_tip() {
    let mut frame = letter_a_frame();
    // Bend the index so its tip lands 30 units from the thumb tip. The bend keeps it
    // non-extended (the mid-to-tip run is far from collinear) despite the longer span.
    frame.index_finger = FingerLandmarks([
        [100.0, 100.0, 0.0],
        [100.0, 110.0, 0.0],
        [90.0, 40.0, 0.0],
        [30.0, 30.0, 0.0],
    ]);
    let hand = Hand::new(&frame);
    assert!(!hand.finger(1).unwrap().is_extended());

    let matches = classify(&hand).unwrap();
    assert!(!matches.get(Letter::A));
}

/// The letter-B handshape: four straight extended fingers, thumb folded across the palm with its
/// tip on the ring-finger knuckle, clear of the index and middle.
fn letter_b_frame() -> HandFrame {
    let column = |x: f32, len: f32| {
        FingerLandmarks([
            [x, 200.0, 0.0],
            [x, 200.0 - len / 3.0, 0.0],
            [x, 200.0 - len * 2.0 / 3.0, 0.0],
            [x, 200.0 - len, 0.0],
        ])
    };
    HandFrame {
        index_finger: column(40.0, 90.0),
        middle_finger: column(80.0, 100.0),
        ring_finger: column(120.0, 95.0),
        pinky: column(160.0, 70.0),
        thumb: FingerLandmarks([
            [150.0, 260.0, 0.0],
            [150.0, 240.0, 0.0],
            [140.0, 220.0, 0.0],
            [125.0, 205.0, 0.0],
        ]),
        bounding_box: bounding_box(),
    }
}

#[test]
fn letter_b_matches_with_thumb_at_ring_base() {
    let hand = Hand::new(&letter_b_frame());

    // Thumb tip sits 7 units from the ring base; index and middle are well clear of the thumb.
    let thumb = hand.finger(5).unwrap();
    assert!(thumb.is_touching_base(hand.finger(3).unwrap()));
    assert!(!thumb.is_in_contact_with(hand.finger(1).unwrap()));
    assert!(!thumb.is_in_contact_with(hand.finger(2).unwrap()));

    let matches = classify(&hand).unwrap();
    assert!(matches.get(Letter::B));
}

#[test]
fn letter_b_rejected_when_thumb_touches_the_index() {
    let mut frame = letter_b_frame();
    // Keep the tip on the ring base but drop one thumb joint next to the index tip (40, 110).
    frame.thumb = FingerLandmarks([
        [150.0, 260.0, 0.0],
        [45.0, 112.0, 0.0],
        [140.0, 220.0, 0.0],
        [125.0, 205.0, 0.0],
    ]);
    let hand = Hand::new(&frame);

    let thumb = hand.finger(5).unwrap();
    assert!(thumb.is_touching_base(hand.finger(3).unwrap()));
    assert!(hand.finger(1).unwrap().is_touching(thumb));

    let matches = classify(&hand).unwrap();
    assert!(!matches.get(Letter::B));
}

#[test]
fn letter_k_requires_thumb_at_both_knuckles() {
    let mut frame = letter_b_frame();
    // Thumb straight, tip equidistant from the index base (40, 200) and middle base (80, 200):
    // both 25 units away, so the thumb reaches both knuckles.
    frame.thumb = FingerLandmarks([
        [20.0, 240.0, 0.0],
        [20.0, 230.0, 0.0],
        [40.0, 207.5, 0.0],
        [60.0, 185.0, 0.0],
    ]);
    let hand = Hand::new(&frame);
    let thumb = hand.finger(5).unwrap();
    assert!(thumb.is_extended());
    assert!(thumb.is_touching_base(hand.finger(1).unwrap()));
    assert!(thumb.is_touching_base(hand.finger(2).unwrap()));
    assert!(classify(&hand).unwrap().get(Letter::K));

    // Move the tip to 35 units from the index base but 53 from the middle base: one contact is
    // not enough.
    frame.thumb = FingerLandmarks([
        [10.0, 240.0, 0.0],
        [10.0, 230.0, 0.0],
        [25.0, 197.5, 0.0],
        [40.0, 165.0, 0.0],
    ]);
    let hand = Hand::new(&frame);
    let thumb = hand.finger(5).unwrap();
    assert!(thumb.is_extended());
    assert!(thumb.is_touching_base(hand.finger(1).unwrap()));
    assert!(!thumb.is_touching_base(hand.finger(2).unwrap()));
    assert!(!classify(&hand).unwrap().get(Letter::K));
}

#[test]
fn classification_is_scale_invariant() {
    let small = Hand::new(&letter_a_frame());
    let large = Hand::new(&scaled(&letter_a_frame(), 3.0));

    let a = classify(&small).unwrap();
    let b = classify(&large).unwrap();
    assert_eq!(a, b);
    assert!(b.get(Letter::A));
}

#[test]
fn legacy_threshold_calibration() {
    // At the reference hand size of 250, the default fractional threshold equals the legacy
    // 40-unit absolute constant: a 39-unit gap is contact, a 41-unit gap is not.
    let mut frame = letter_a_frame();
    frame.thumb = FingerLandmarks([
        [61.0, 170.0, 0.0],
        [61.0, 160.0, 0.0],
        [61.0, 130.0, 0.0],
        [61.0, 100.0, 0.0],
    ]);
    frame.index_finger = folded(100.0);
    let hand = Hand::new(&frame);
    let thumb = hand.finger(5).unwrap();
    let index = hand.finger(1).unwrap();
    // Thumb tip (61, 100) to index base (100, 100): 39 units.
    assert!(thumb.is_touching(index));

    let mut apart = frame;
    apart.thumb = FingerLandmarks([
        [59.0, 170.0, 0.0],
        [59.0, 160.0, 0.0],
        [59.0, 130.0, 0.0],
        [59.0, 100.0, 0.0],
    ]);
    let hand = Hand::new(&apart);
    let thumb = hand.finger(5).unwrap();
    let index = hand.finger(1).unwrap();
    // 41 units: just outside the threshold. The index column spans y=100..130 at x=100, so the
    // closest landmark to the thumb tip is the base.
    assert!(!thumb.is_touching(index));
}

#[test]
fn custom_contact_threshold() {
    // A wider contact fraction turns the 60-unit thumb-to-index gap of the open hand shape into
    // a contact.
    let frame = letter_a_frame();
    let strict = Hand::new(&frame);
    let loose = Hand::with_config(
        &frame,
        HandConfig {
            contact_threshold: 0.6,
        },
    );

    let gap = |hand: &Hand| {
        hand.finger(5)
            .unwrap()
            .is_in_contact_with(hand.finger(1).unwrap())
    };
    assert!(!gap(&strict));
    assert!(gap(&loose));
}

#[test]
fn frame_roundtrips_through_json() {
    let frame = letter_a_frame();
    let json = serde_json::to_string(&frame).unwrap();
    let back: HandFrame = serde_json::from_str(&json).unwrap();
    assert_eq!(frame, back);
}
