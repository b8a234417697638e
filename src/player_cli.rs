#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::{String, ToString};

use rand::rngs::SmallRng;

use crate::{board::Board, config::BOARD_SIZE, player::Player};

/// Format (row, col) as a board coordinate such as `B7`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col = (b'A' + col as u8) as char;
    format!("{}{}", col, row + 1)
}

/// Parse a coordinate such as `B7` into zero-based (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

/// Human player reading targets from a line-based input.
pub struct CliPlayer<I> {
    input: I,
}

impl CliPlayer<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<I: BufRead> CliPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: BufRead> Player for CliPlayer<I> {
    /// Prompt until a fresh coordinate is entered. Returns `None` on end of
    /// input.
    fn select_target(&mut self, _rng: &mut SmallRng, target: &Board) -> Option<(usize, usize)> {
        loop {
            print!("Enter target (e.g. A5): ");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_coord(&line) {
                Ok((r, c)) if target.is_played(r, c) => {
                    println!("{} was already played, pick another cell.", coord_to_string(r, c));
                }
                Ok(coord) => return Some(coord),
                Err(e) => println!("{}", e),
            }
        }
    }
}
