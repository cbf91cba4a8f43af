extern crate tictactoe_model;

use tictactoe_model::boards::tic_tac_toe::{Player, TicTacToeBoard};
use tictactoe_model::config::SessionConfig;
use tictactoe_model::model::Outcome;
use tictactoe_model::random::{RandomGenerator, StandardRandomGenerator};
use tictactoe_model::session::GameSession;
use tictactoe_model::strategist::RandomStrategist;
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
computer_seat = 1
min_think_time_ms = 0
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match SessionConfig::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Create a new session and let two random strategists play it out
    let session = GameSession::builder(TicTacToeBoard::<()>::new())
        .with_session_config(&config)
        .build();
    let outcome = play_out(&session, RandomStrategist::new(StandardRandomGenerator));

    println!("{}\n", session.snapshot());
    match outcome {
        Outcome::Winner(player) => println!("{player} wins!"),
        Outcome::Draw => println!("It's a draw"),
        Outcome::Playing => unreachable!("play_out stops at a finished game"),
    }
}

fn play_out<K>(
    session: &GameSession<TicTacToeBoard>,
    mut strategist: RandomStrategist<K>,
) -> Outcome<Player>
where
    K: RandomGenerator + Send + 'static,
{
    loop {
        let pending = session.request_computer_move(strategist);
        match session.commit(pending) {
            Ok(committed) => {
                println!("{} played {}", session.active_player().opponent(), committed.played);
                if committed.outcome.is_terminal() {
                    return committed.outcome;
                }
                strategist = committed.strategist;
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
