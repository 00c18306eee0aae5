//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::{WINNING_LINES, line_owner};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X is the maximizing player (value +1), O the minimizing player (value -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Minimax value of this player's marks
    pub fn value(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

/// A 3x3 board, indexed 0-8 in row-major order
///
/// This type implements `Copy` since it's only 9 bytes; the search relies on
/// that to explore hypothetical moves on independent copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (`.`, `X`, `O`);
    /// whitespace is filtered out.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - There are fewer than 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Get all empty positions in ascending order
    ///
    /// The ascending order is what breaks ties in the search: the first
    /// candidate with the best score wins.
    pub fn valid_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place a player's mark at a position, in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the position is out of range
    /// or already occupied. Self-play never exercises this path.
    pub fn apply(&mut self, pos: usize, player: Player) -> Result<(), crate::Error> {
        if pos >= 9 || self.cells[pos] != Cell::Empty {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        self.cells[pos] = player.to_cell();
        Ok(())
    }

    /// Get the winner if there is one.
    ///
    /// Scans the 8 winning lines in the fixed order of
    /// [`WINNING_LINES`] (rows, columns, diagonals) and returns the owner of
    /// the first fully-owned line. Does not detect or special-case a draw.
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| line_owner(&self.cells, line))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} {}",
                self.cells[3 * row].to_char(),
                self.cells[3 * row + 1].to_char(),
                self.cells[3 * row + 2].to_char()
            )?;
        }
        Ok(())
    }
}
