mod board;
pub use board::Board;
pub use board::POINT_COUNT;

mod checker;
pub use checker::Checker;
pub use checker::CheckerId;

mod color;
pub use color::Color;

mod player;
pub use player::Player;
pub use player::CHECKERS_PER_PLAYER;

mod position;
pub use position::Source;
pub use position::Target;
pub use position::BAR_SENTINEL;

mod game;
pub use game::EngineState;
pub use game::GameEngine;

mod halfmove;
pub use halfmove::HalfMove;

mod dice;
pub use dice::DiceRoll;
pub use dice::DiceRoller;
