//! Mini-game engines: small self-contained state machines driven by UI
//! events. Illegal moves are no-ops rather than errors; randomness always
//! comes through an injected `rand::Rng`.

mod color_guess;
mod countdown;
mod dice;
mod guess_number;
mod memory_match;
mod rock_paper_scissors;
mod tic_tac_toe;
mod word_scramble;

pub use color_guess::*;
pub use countdown::*;
pub use dice::*;
pub use guess_number::*;
pub use memory_match::*;
pub use rock_paper_scissors::*;
pub use tic_tac_toe::*;
pub use word_scramble::*;
