mod apple;
mod driver;
mod error;
mod game;
mod input;
mod position;
mod render;
mod snake;
mod term;

use anyhow::Result;
use log::info;

use crate::driver::{LoopConfig, Outcome};
use crate::game::SnakeGame;
use crate::input::{InputPoller, TerminalKeys};
use crate::term::TermManager;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut term = TermManager::new();
    term.setup()?;

    // Put the terminal back even if the game bailed out
    let res = play(&mut term).await;
    term.restore()?;
    res
}

async fn play(term: &mut TermManager) -> Result<()> {
    let config = LoopConfig::default();
    let (poller, mut keys) = InputPoller::spawn(TerminalKeys, config.input_poll);

    let mut game = SnakeGame::new();
    let outcome = driver::run(&mut game, term, &mut keys, &config).await;

    drop(keys);
    poller.shutdown().await?;

    match outcome? {
        Outcome::GameOver => info!("finished, snake length {}", game.snake().len()),
        Outcome::Quit => info!("quit by player"),
    }

    Ok(())
}
