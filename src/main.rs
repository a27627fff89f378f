use std::process::ExitCode;

use chess_core::agent::{AiPlayer, GameResult, Player};
use chess_core::config::EngineConfig;
use chess_core::game_repr::{Color, GameState, Type};
use log::{debug, error, info};

fn main() -> ExitCode {
    env_logger::init();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("bad configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("starting self-play with {config:?}");

    let mut white = AiPlayer::from_config(&config, config.white, 0);
    let mut black = AiPlayer::from_config(&config, config.black, 1);
    let mut state = GameState::new();

    let result = loop {
        if let Some(result) = GameResult::from_status(state.checkmate_stalemate_checker()) {
            break result;
        }
        if state.moves().count() as u32 >= config.max_plies {
            info!("ply limit {} reached", config.max_plies);
            break GameResult::Draw;
        }

        let (mover, other): (&mut AiPlayer, &mut AiPlayer) = match state.side_to_move() {
            Color::White => (&mut white, &mut black),
            Color::Black => (&mut black, &mut white),
        };

        let Some(mv) = mover.get_move(&state) else {
            error!("{} produced no move in a live position", mover.name());
            return ExitCode::FAILURE;
        };
        let number = state.fullmove_number();
        let side = state.side_to_move();

        if let Err(err) = state.move_piece_promoting(
            mv.from,
            mv.to,
            mv.promotion().unwrap_or(Type::Queen),
            true,
        ) {
            error!("{} chose an illegal move {mv}: {err}", mover.name());
            return ExitCode::FAILURE;
        }
        other.opponent_moved(mv);

        info!("{number}{} {mv}", if side == Color::White { "." } else { "..." });
        debug!("\n{state}");
    };

    white.game_ended(result);
    black.game_ended(result);
    info!("result: {result:?} after {} plies\n{state}", state.moves().count());
    println!("{result:?}");

    ExitCode::SUCCESS
}
