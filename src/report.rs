//! Tabular report generation: the language-agnostic row/column structure handed to whatever
//! renders the classification result. No formatting or markup happens here, only sequences of
//! rows of primitive values.

use itertools::Itertools;

use crate::hand::Hand;
use crate::letters::LetterMatches;

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Num(f32),
    Bool(bool),
}

impl Cell {
    fn text(s: impl Into<String>) -> Cell {
        Cell::Text(s.into())
    }

    /// Placeholder for cells with no meaningful value (e.g. the matrix diagonal).
    fn dash() -> Cell {
        Cell::Text("-".into())
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Num(n) => write!(f, "{n:.2}"),
            Cell::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A sequence of rows, each an ordered sequence of cells.
pub type Table = Vec<Vec<Cell>>;

/// Per-finger feature rows: name, length, relative length, extension flag, orientation.
pub fn finger_rows(hand: &Hand) -> Table {
    let header = ["-", "Length", "Relative Length", "Extended", "Orientation"]
        .into_iter()
        .map(Cell::text)
        .collect_vec();

    let mut rows = vec![header];
    rows.extend(hand.fingers().map(|f| {
        vec![
            Cell::text(f.kind().as_str()),
            Cell::Num(f.length()),
            Cell::Num(f.relative_length()),
            Cell::Bool(f.is_extended()),
            Cell::text(f.orientation().as_str()),
        ]
    }));
    rows
}

/// Hand summary: size and orientation.
pub fn hand_row(hand: &Hand) -> Table {
    vec![
        vec![Cell::text("Size"), Cell::text("Orientation")],
        vec![
            Cell::Num(hand.size()),
            Cell::text(hand.orientation().as_str()),
        ],
    ]
}

/// The finger contact matrix: tip-to-tip contact for every finger pair, followed by the
/// thumb-against-finger-base, fingertip-against-thumb, and own-base (curl) rows.
pub fn contact_matrix(hand: &Hand) -> Table {
    let fingers = hand.fingers().collect_vec();
    let names = fingers.iter().map(|f| f.kind().as_str()).collect_vec();

    let mut header = vec![Cell::dash()];
    header.extend(names.iter().copied().map(Cell::text));
    let mut rows = vec![header];

    for (i, &f) in fingers.iter().enumerate() {
        let mut row = vec![Cell::text(names[i])];
        row.extend(fingers.iter().enumerate().map(|(j, &other)| {
            if i == j {
                Cell::dash()
            } else {
                Cell::Bool(f.is_touching_tip(other))
            }
        }));
        rows.push(row);
    }

    let thumb = hand.finger_of(crate::finger::FingerKind::Thumb);

    let mut thumb_base_row = vec![Cell::text("ThumbWithFingerBase")];
    thumb_base_row.extend(fingers.iter().map(|&f| {
        if f.kind() == thumb.kind() {
            Cell::dash()
        } else {
            Cell::Bool(thumb.is_touching_base(f))
        }
    }));
    rows.push(thumb_base_row);

    let mut tip_thumb_row = vec![Cell::text("FingerTipWithThumb")];
    tip_thumb_row.extend(fingers.iter().map(|&f| {
        if f.kind() == thumb.kind() {
            Cell::dash()
        } else {
            Cell::Bool(f.is_touching(thumb))
        }
    }));
    rows.push(tip_thumb_row);

    let mut own_base_row = vec![Cell::text("FingerOwnBase")];
    own_base_row.extend(fingers.iter().map(|&f| Cell::Bool(f.is_curled())));
    rows.push(own_base_row);

    rows
}

/// The letter match vector as a two-row table: letter names, then verdicts.
pub fn letter_row(matches: &LetterMatches) -> Table {
    let (names, verdicts): (Vec<_>, Vec<_>) = matches
        .iter()
        .map(|(letter, hit)| (Cell::text(letter.as_char().to_string()), Cell::Bool(hit)))
        .unzip();
    vec![names, verdicts]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::classify;
    use crate::test;

    #[test]
    fn finger_rows_shape() {
        let hand = test::open_hand();
        let rows = finger_rows(&hand);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 5));
        assert_eq!(rows[1][0], Cell::Text("Index".into()));
        assert_eq!(rows[5][0], Cell::Text("Thumb".into()));
        assert_eq!(rows[1][3], Cell::Bool(true));
    }

    #[test]
    fn hand_row_reports_size() {
        let hand = test::open_hand();
        let rows = hand_row(&hand);
        assert_eq!(rows[1][0], Cell::Num(250.0));
        assert_eq!(rows[1][1], Cell::Text("x".into()));
    }

    #[test]
    fn contact_matrix_shape_and_symmetry() {
        let hand = test::open_hand();
        let rows = contact_matrix(&hand);
        // Header + 5 finger rows + 3 extra rows, each 6 wide.
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.len() == 6));
        // Tip-to-tip contact is symmetric.
        for i in 1..=5 {
            for j in 1..=5 {
                if i != j {
                    assert_eq!(rows[i][j], rows[j][i]);
                }
            }
        }
        // Diagonal is the placeholder.
        for i in 1..=5 {
            assert_eq!(rows[i][i], Cell::Text("-".into()));
        }
    }

    #[test]
    fn letter_row_spans_the_alphabet() {
        let hand = test::open_hand();
        let rows = letter_row(&classify(&hand).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 21);
        assert_eq!(rows[0][0], Cell::Text("A".into()));
        assert_eq!(rows[0][20], Cell::Text("U".into()));
    }
}
