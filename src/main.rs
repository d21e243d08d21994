use gridsnake::game::SnakeGame;

fn main() -> crossterm::Result<()> {
    let mut game = SnakeGame::new()?;
    game.play()
}
