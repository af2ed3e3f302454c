use boggle::board::Board;

use rand::thread_rng;
use std::env;

fn main() {
    let board = Board::random(&mut thread_rng());
    print!("{}", board);
    for word in env::args().skip(1) {
        let found = board.find(&word.to_uppercase());
        println!(
            "{}: {}",
            word,
            if found { "on board" } else { "not on board" }
        );
    }
}
