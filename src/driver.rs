use std::time::Duration;

use crate::game::SnakeGame;
use crate::input::is_ctrl_c;
use crate::render::{Canvas, Render};

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{debug, info, warn};
use rand::Rng;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval, sleep};

const TICK_INTERVAL_MS: u64 = 100;
const INPUT_POLL_INTERVAL_MS: u64 = 10;
const EPILOGUE_BLINKS: u32 = 3;
const EPILOGUE_BLINK_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub tick: Duration,
    pub input_poll: Duration,
    pub blinks: u32,
    pub blink: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            tick: Duration::from_millis(TICK_INTERVAL_MS),
            input_poll: Duration::from_millis(INPUT_POLL_INTERVAL_MS),
            blinks: EPILOGUE_BLINKS,
            blink: Duration::from_millis(EPILOGUE_BLINK_MS),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    Quit,
}

/// Runs the game until the snake dies (followed by the blinking epilogue) or
/// the player hits Ctrl+C. Keys are applied between ticks, never during one.
pub async fn run<R: Rng, C: Canvas>(
    game: &mut SnakeGame<R>,
    canvas: &mut C,
    keys: &mut UnboundedReceiver<KeyEvent>,
    config: &LoopConfig,
) -> Result<Outcome> {
    let mut ticker = interval(config.tick);
    ticker.tick().await; // The first tick completes immediately
    let mut keys_open = true;

    game.render(canvas)?;

    while !game.is_game_over() {
        tokio::select! {
            _ = ticker.tick() => {
                game.on_tick()?;
                game.render(canvas)?;
            }
            key = keys.recv(), if keys_open => match key {
                Some(key) if is_ctrl_c(&key) => {
                    info!("quit requested");
                    return Ok(Outcome::Quit);
                }
                Some(key) => game.on_key_press(&key),
                None => {
                    warn!("input closed, the snake can no longer be steered");
                    keys_open = false;
                }
            },
        }
    }

    info!("game over, length {}", game.snake().len());
    epilogue(game, canvas, config).await?;
    Ok(Outcome::GameOver)
}

async fn epilogue<R, C: Canvas>(game: &SnakeGame<R>, canvas: &mut C, config: &LoopConfig) -> Result<()> {
    for blink in 0..config.blinks {
        debug!("epilogue blink {}", blink + 1);
        canvas.clear_screen()?;
        canvas.reset_cursor()?;
        sleep(config.blink).await;

        game.render(canvas)?;
        sleep(config.blink).await;
    }

    Ok(())
}
