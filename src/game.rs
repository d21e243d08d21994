use std::time::Duration;

use crate::food::FoodSpawner;
use crate::snake::{Direction::{self, *}, MoveStep, Snake};
use crate::term::TermManager;
use crate::GridInt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::Result;

const TICK_INTERVAL_MS: u64 = 100;
const FOOD_REWARD: u64 = 10;

const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '*';
const DEAD_SNAKE_CHAR: char = 'X';

enum TickInput {
    Turn(Direction),
    Quit,
}

enum Outcome {
    Crashed,
    Won,
    Quit,
}

pub struct SnakeGame {
    height: GridInt,
    width: GridInt,
    score: u64,
    term: TermManager,
    spawner: FoodSpawner,
}

impl SnakeGame {
    pub fn new() -> Result<Self> {
        let term = TermManager::new()?;
        let (width, height) = term.size();
        Ok(SnakeGame {
            height,
            width,
            score: 0,
            term,
            spawner: FoodSpawner::new(),
        })
    }

    /// Runs one full session and restores the terminal afterwards.
    pub fn play(&mut self) -> Result<()> {
        self.term.setup()?;
        let result = self.run();
        self.term.restore()?;
        result
    }

    fn run(&mut self) -> Result<()> {
        self.term.clear()?;
        self.term.draw_borders(self.height, self.width)?;

        let mut snake = Snake::new((self.height / 2, self.width / 2));
        let mut food = match self.spawner.place(&snake, self.height, self.width) {
            Some(pos) => pos,
            // No interior left to put food on, nothing to play
            None => return self.finish(&snake, Outcome::Won),
        };

        self.term.print_at(food, FOOD_CHAR)?;
        self.term.print_at(snake.head(), snake.head_char())?;
        self.draw_score()?;
        self.term.flush()?;

        let outcome = loop {
            // One bounded-wait poll per tick; no key is the usual case
            match self.poll_input()? {
                Some(TickInput::Quit) => break Outcome::Quit,
                Some(TickInput::Turn(dir)) => snake.set_direction(dir),
                None => {}
            }

            let step = snake.move_step();

            if snake.check_collision(self.height, self.width) {
                break Outcome::Crashed;
            }

            if step.head == food {
                snake.grow();
                self.score += FOOD_REWARD;
                self.draw_score()?;
                match self.spawner.place(&snake, self.height, self.width) {
                    Some(pos) => {
                        food = pos;
                        self.term.print_at(food, FOOD_CHAR)?;
                    }
                    None => break Outcome::Won,
                }
            }

            self.draw_step(&snake, &step)?;
        };

        self.finish(&snake, outcome)
    }

    fn poll_input(&mut self) -> Result<Option<TickInput>> {
        let key = match self.term.poll_key(Duration::from_millis(TICK_INTERVAL_MS))? {
            Some(ev) => ev,
            None => return Ok(None),
        };

        let input = match key {
            KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => {
                Some(TickInput::Quit)
            }
            KeyEvent { code, .. } => match code {
                KeyCode::Char('w') | KeyCode::Up => Some(TickInput::Turn(Up)),
                KeyCode::Char('a') | KeyCode::Left => Some(TickInput::Turn(Left)),
                KeyCode::Char('s') | KeyCode::Down => Some(TickInput::Turn(Down)),
                KeyCode::Char('d') | KeyCode::Right => Some(TickInput::Turn(Right)),
                KeyCode::Char('q') => Some(TickInput::Quit),
                _ => None,
            },
        };

        Ok(input)
    }

    fn draw_score(&mut self) -> Result<()> {
        let text = format!(" Score: {} ", self.score);
        self.term.print_text_at((0, 2), &text)
    }

    fn draw_step(&mut self, snake: &Snake, step: &MoveStep) -> Result<()> {
        self.term.print_at(step.head, snake.head_char())?;

        // The old head becomes a plain body segment
        if let Some(&neck) = snake.body().get(1) {
            self.term.print_at(neck, SNAKE_BODY_CHAR)?;
        }

        if let Some(tail) = step.freed_tail {
            self.term.print_at(tail, ' ')?;
        }

        self.term.flush()
    }

    fn finish(&mut self, snake: &Snake, outcome: Outcome) -> Result<()> {
        if let Outcome::Crashed = outcome {
            for &pos in snake.body() {
                self.term.print_at(pos, DEAD_SNAKE_CHAR)?;
            }
        }

        let title = match outcome {
            Outcome::Won => "You won!",
            Outcome::Crashed | Outcome::Quit => "GAME OVER!",
        };

        self.term.show_message(&[
            title,
            &format!("Final score: {}", self.score),
            "",
            "Press any key to exit",
        ])?;

        self.term.read_key_blocking()?;
        Ok(())
    }
}
