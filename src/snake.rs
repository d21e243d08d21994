use std::collections::VecDeque;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Movement delta of a single step, for incremental repainting.
pub struct MoveStep {
    pub head: Coords,
    pub freed_tail: Option<Coords>,
}

pub struct Snake {
    body: VecDeque<Coords>,
    direction: Direction,
    grow_next_move: bool,
}

impl Snake {
    pub fn new(start: Coords) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start);
        Snake { body, direction: Right, grow_next_move: false }
    }

    /// Full segment sequence, head-first.
    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn head(&self) -> Coords {
        *self.body.front().unwrap()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Reversals of the current heading are dropped silently; anything
    /// else takes effect on the next step.
    pub fn set_direction(&mut self, new_direction: Direction) {
        match (new_direction, self.direction) {
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left) => {}
            _ => self.direction = new_direction,
        }
    }

    /// Advances one cell in the current heading. No bounds check happens
    /// here: the head may land on the wall ring, `check_collision` decides.
    pub fn move_step(&mut self) -> MoveStep {
        let (row, col) = self.head();
        let head = match self.direction {
            Up => (row - 1, col),
            Down => (row + 1, col),
            Left => (row, col - 1),
            Right => (row, col + 1),
        };

        self.body.push_front(head);

        let freed_tail = if self.grow_next_move {
            None
        } else {
            self.body.pop_back()
        };
        self.grow_next_move = false;

        MoveStep { head, freed_tail }
    }

    /// Queues one segment of growth for the next step, no matter how many
    /// times this is called before then.
    pub fn grow(&mut self) {
        self.grow_next_move = true;
    }

    /// True iff the head sits on or beyond the outer wall ring, or on
    /// another body segment. Pure query, call it after `move_step`.
    pub fn check_collision(&self, height: GridInt, width: GridInt) -> bool {
        let (row, col) = self.head();

        if row <= 0 || row >= height - 1 || col <= 0 || col >= width - 1 {
            return true;
        }

        self.body.iter().skip(1).any(|&segment| segment == (row, col))
    }

    /// Occupancy test over the whole body, head included.
    pub fn collides_with(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
