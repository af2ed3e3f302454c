pub mod filters {

    use super::handlers;
    use crate::game::Game;
    use crate::web::db::InMemSessionStore;
    use crate::web::requests::WordQuery;
    use crate::web::SESSION_ID;

    use warp::Filter;

    pub fn app(
        game: Game,
        sess: InMemSessionStore,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        return new_board(game.clone(), sess.clone())
            .or(check_word(game.clone(), sess.clone()))
            .or(post_score(sess));
    }

    pub fn new_board(
        game: Game,
        sess: InMemSessionStore,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        return warp::path::end()
            .and(warp::filters::method::get())
            .and(warp::filters::cookie::optional::<String>(SESSION_ID))
            .and(with_game(game))
            .and(with_sess(sess))
            .and_then(handlers::new_board);
    }

    pub fn check_word(
        game: Game,
        sess: InMemSessionStore,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("check-word")
            .and(warp::filters::method::get())
            .and(warp::query::<WordQuery>())
            .and(warp::filters::cookie::optional::<String>(SESSION_ID))
            .and(with_game(game))
            .and(with_sess(sess))
            .and_then(handlers::check_word)
    }

    pub fn post_score(
        sess: InMemSessionStore,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path!("post-score")
            .and(warp::filters::method::post())
            .and(warp::body::json())
            .and(warp::filters::cookie::optional::<String>(SESSION_ID))
            .and(with_sess(sess))
            .and_then(handlers::post_score)
    }

    fn with_game(
        game: Game,
    ) -> impl Filter<Extract = (Game,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || game.clone())
    }

    fn with_sess(
        sess: InMemSessionStore,
    ) -> impl Filter<Extract = (InMemSessionStore,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || sess.clone())
    }
}

pub mod handlers {

    use crate::game::Game;
    use crate::web::db::{InMemSessionStore, Session};
    use crate::web::errors::MissingSessionError;
    use crate::web::gen_session_cookie;
    use crate::web::requests::{ScoreSubmission, WordQuery};
    use crate::web::responses::{BoardResp, CheckWordResp, ErrorResp, ScoreResp};
    use std::convert::Infallible;
    use uuid::Uuid;
    use warp::http::StatusCode;

    pub fn generate_session_id() -> String {
        return Uuid::new_v4().to_string();
    }

    /// Deal a fresh board into the caller's session, creating the
    /// session when the cookie is absent or stale.
    pub async fn new_board(
        sess_id: Option<String>,
        game: Game,
        sess: InMemSessionStore,
    ) -> Result<impl warp::Reply, warp::Rejection> {
        let (sess_id, mut session) = match sess_id {
            Some(id) => match sess.get(&id).await {
                Some(s) => (id, s),
                None => (generate_session_id(), Session::default()),
            },
            None => (generate_session_id(), Session::default()),
        };
        let board = game.new_board();
        let resp = BoardResp::new(&board, &session.record);
        session.board = Some(board);
        sess.insert(&sess_id, session).await;
        let reply = warp::reply::json(&resp);
        return Ok(warp::reply::with_header(
            reply,
            "Set-Cookie",
            gen_session_cookie(&sess_id, false), // TODO: Set to true if prod
        ));
    }

    /// Judge a submitted word against the board stored in the session.
    pub async fn check_word(
        query: WordQuery,
        sess_id: Option<String>,
        game: Game,
        sess: InMemSessionStore,
    ) -> Result<impl warp::Reply, warp::Rejection> {
        let session = lookup_session(&sess_id, &sess).await?;
        let board = match session.board {
            Some(b) => b,
            None => {
                return Err(warp::reject::custom(MissingSessionError::new(
                    "no board dealt for this session",
                )));
            }
        };
        let result = game.classify(&board, &query.word);
        Ok(warp::reply::json(&CheckWordResp { result }))
    }

    /// Fold a finished game's score into the session's record.
    pub async fn post_score(
        submission: ScoreSubmission,
        sess_id: Option<String>,
        sess: InMemSessionStore,
    ) -> Result<impl warp::Reply, warp::Rejection> {
        let sess_id = match sess_id {
            Some(id) => id,
            None => {
                return Err(warp::reject::custom(MissingSessionError::new(
                    "no session cookie",
                )));
            }
        };
        let mut session = match sess.get(&sess_id).await {
            Some(s) => s,
            None => {
                return Err(warp::reject::custom(MissingSessionError::new(
                    "unknown session",
                )));
            }
        };
        let (record, is_new_record) = session.record.submit(submission.score);
        session.record = record;
        sess.insert(&sess_id, session).await;
        Ok(warp::reply::json(&ScoreResp { is_new_record }))
    }

    async fn lookup_session(
        sess_id: &Option<String>,
        sess: &InMemSessionStore,
    ) -> Result<Session, warp::Rejection> {
        let sess_id = match sess_id {
            Some(id) => id,
            None => {
                return Err(warp::reject::custom(MissingSessionError::new(
                    "no session cookie",
                )));
            }
        };
        match sess.get(sess_id).await {
            Some(s) => Ok(s),
            None => Err(warp::reject::custom(MissingSessionError::new(
                "unknown session",
            ))),
        }
    }

    /// Turn rejections into JSON error bodies with sane status codes.
    pub async fn handle_rejection(
        err: warp::Rejection,
    ) -> Result<impl warp::Reply, Infallible> {
        let (code, msg) = if err.is_not_found() {
            (StatusCode::NOT_FOUND, String::from("not found"))
        } else if let Some(e) = err.find::<MissingSessionError>() {
            (StatusCode::BAD_REQUEST, e.msg.clone())
        } else if err
            .find::<warp::filters::body::BodyDeserializeError>()
            .is_some()
        {
            (StatusCode::BAD_REQUEST, String::from("invalid request body"))
        } else if err.find::<warp::reject::InvalidQuery>().is_some() {
            (StatusCode::BAD_REQUEST, String::from("invalid query string"))
        } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
            (
                StatusCode::METHOD_NOT_ALLOWED,
                String::from("method not allowed"),
            )
        } else {
            eprintln!("unhandled rejection: {:?}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("internal error"),
            )
        };
        let json = warp::reply::json(&ErrorResp { error: msg });
        Ok(warp::reply::with_status(json, code))
    }
}

#[cfg(test)]
mod tests {

    use super::filters;
    use crate::dict::Dictionary;
    use crate::game::Game;
    use crate::web::db::InMemSessionStore;
    use std::sync::Arc;

    fn test_game() -> Game {
        Game::new(Arc::new(Dictionary::from_lines(vec!["cat", "impossible"])))
    }

    #[tokio::test]
    async fn test_new_board_creates_session() {
        let game = test_game();
        let sess = InMemSessionStore::new();
        let route = filters::new_board(game, sess.clone());
        let res = warp::test::request().path("/").reply(&route).await;
        assert_eq!(res.status(), 200);
        let cookie = res
            .headers()
            .get("set-cookie")
            .expect("should set a session cookie")
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("SESSION_ID="));
        assert_eq!(sess.num_sessions().await, 1);
    }

    #[tokio::test]
    async fn test_new_board_body_shape() {
        let game = test_game();
        let sess = InMemSessionStore::new();
        let route = filters::new_board(game, sess);
        let res = warp::test::request().path("/").reply(&route).await;
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        let rows = body["board"].as_array().expect("board should be an array");
        assert_eq!(rows.len(), 5);
        for row in rows {
            assert_eq!(row.as_str().unwrap().len(), 5);
        }
        assert_eq!(body["highest_score"], 0);
        assert_eq!(body["num_tries"], 0);
    }
}
