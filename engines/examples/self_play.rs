/// Engine-vs-engine game at the default search depth
///
/// Run with `RUST_LOG=debug` to see the search statistics for every move.
use log::info;
use othello_core::GameState;
use othello_engines::{compute_move, SearchConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SearchConfig::default();
    let mut state = GameState::new();
    let mut ply = 0;

    println!("=== Othello Self-Play (depth {}) ===\n", config.depth);
    println!("{}\n", state);

    while !state.is_terminal() {
        let mover = state.current_player();

        match compute_move(&state, mover, &config) {
            Some(coord) => {
                ply += 1;
                match state.apply_move(mover, coord) {
                    Ok(flipped) => info!(
                        "ply {}: {:?} plays {} flipping {}",
                        ply, mover, coord, flipped
                    ),
                    Err(err) => {
                        eprintln!("engine produced an illegal move: {}", err);
                        return;
                    }
                }
                println!("{}\n", state);
            }
            None => {
                info!("{:?} has no legal move and passes", mover);
                state.pass_turn();
            }
        }
    }

    let (dark, light) = state.score();
    let result = match state.winner() {
        Some(player) => format!("{:?} wins", player),
        None => "Draw".to_string(),
    };
    println!("{} | Dark: {} Light: {}", result, dark, light);
}
