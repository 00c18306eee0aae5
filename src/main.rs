//! Self-play entry point: one game of perfect tic-tac-toe on stdout

use anyhow::Result;

use oxo::play_random_opening;

fn main() -> Result<()> {
    let mut rng = rand::rng();

    for board in play_random_opening(&mut rng)? {
        println!("{board}\n");
    }

    Ok(())
}
