use anyhow::{Context, Result};
use boggle::dict::Dictionary;
use boggle::game::Game;
use boggle::web::app::{filters, handlers};
use boggle::web::db::InMemSessionStore;
use std::env;
use std::sync::Arc;
use warp::Filter;

#[tokio::main]
async fn main() -> Result<()> {
    let dict_path = env::args().nth(1).unwrap_or_else(|| String::from("words.txt"));
    let dict = Dictionary::from_file(&dict_path)
        .with_context(|| format!("cannot start without a dictionary ({})", dict_path))?;
    eprintln!("loaded {} words from {}", dict.len(), dict_path);

    let game = Game::new(Arc::new(dict));
    let sess = InMemSessionStore::new();
    let api = filters::app(game, sess).recover(handlers::handle_rejection);
    let routes = api.with(warp::log("boggle"));

    warp::serve(routes).run(([127, 0, 0, 1], 8080)).await;
    Ok(())
}
