//! Classifies a single hand landmark frame and prints the report tables.
//!
//! Reads a JSON `HandFrame` from the path given as the first argument, or from stdin when no
//! argument is given:
//!
//! ```text
//! cargo run --example classify -- frame.json
//! ```

use std::fs::File;
use std::io::{stdin, Read};

use itertools::Itertools;

use fingerspell::hand::Hand;
use fingerspell::landmark::HandFrame;
use fingerspell::letters::classify;
use fingerspell::report::{self, Table};

fn print_table(title: &str, table: &Table) {
    println!("== {title}");
    for row in table {
        println!("{}", row.iter().map(|cell| cell.to_string()).join("\t"));
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    fingerspell::init_logger!();

    let mut json = String::new();
    match std::env::args().nth(1) {
        Some(path) => {
            File::open(&path)?.read_to_string(&mut json)?;
        }
        None => {
            stdin().read_to_string(&mut json)?;
        }
    }

    let frame: HandFrame = serde_json::from_str(&json)?;
    let hand = Hand::new(&frame);
    let matches = classify(&hand)?;

    print_table("fingers", &report::finger_rows(&hand));
    print_table("hand", &report::hand_row(&hand));
    print_table("contacts", &report::contact_matrix(&hand));
    print_table("letters", &report::letter_row(&matches));

    let matched = matches.matched().map(|l| l.as_char()).collect_vec();
    if matched.is_empty() {
        println!("no letter matched");
    } else {
        println!("matched: {}", matched.iter().join(", "));
    }

    Ok(())
}
