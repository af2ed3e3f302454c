// Larger integration type tests for the web app.

use boggle::board::Board;
use boggle::dict::Dictionary;
use boggle::game::Game;
use boggle::web::app::{filters, handlers};
use boggle::web::db::{InMemSessionStore, Session};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use warp::Filter;

fn hyper_bytes_to_string(b: &warp::hyper::body::Bytes) -> Result<String, String> {
    Ok(String::from_utf8(b.to_vec()).unwrap())
}

pub struct Cookie {
    key_values: HashMap<String, String>,
    flags: HashSet<String>,
}

impl Cookie {
    pub fn has_field(&self, key: &str) -> bool {
        self.key_values.contains_key(key)
    }

    pub fn get_field(&self, key: &str) -> Option<&String> {
        self.key_values.get(key)
    }

    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

fn parse_cookies(header_str: &str) -> Cookie {
    let mut cookie_fields: HashMap<String, String> = HashMap::new();
    let mut cookie_flags: HashSet<String> = HashSet::new();
    for field in header_str.split(";") {
        let ind = field.trim().find("=");
        match ind {
            Some(ind) => {
                let key = &field[0..ind];
                let value = &field[ind + 1..];
                cookie_fields.insert(key.to_string(), value.to_string());
            }
            None => {
                cookie_flags.insert(field.to_string());
            }
        };
    }
    return Cookie {
        key_values: cookie_fields,
        flags: cookie_flags,
    };
}

fn test_game() -> Game {
    Game::new(Arc::new(Dictionary::from_lines(vec!["cat", "impossible"])))
}

#[tokio::test]
async fn test_new_board_session_cookie() {
    let sess = InMemSessionStore::new();
    let web_app = filters::app(test_game(), sess.clone()).recover(handlers::handle_rejection);

    let res = warp::test::request().path("/").reply(&web_app).await;
    assert_eq!(res.status(), 200);
    let cookie_str = res
        .headers()
        .get("set-cookie")
        .expect("should set session cookie")
        .to_str()
        .expect("Error getting cookie string");
    let cookie = parse_cookies(cookie_str);
    assert!(cookie.has_field("SESSION_ID"));
    assert!(cookie.has_field("Max-age"));
    assert_eq!("/".to_string(), cookie.get_field("path").unwrap().clone());
    assert_eq!(
        "Strict".to_string(),
        cookie.get_field("SameSite").unwrap().clone()
    );
    let sess_id = cookie.get_field("SESSION_ID").unwrap().clone();

    // the session holds the board that was just dealt
    let session = sess.get(&sess_id).await.expect("session should exist");
    assert!(session.board.is_some());
    assert_eq!(session.record.num_tries, 0);

    // a second request with the cookie reuses the session
    let res = warp::test::request()
        .path("/")
        .header("cookie", format!("SESSION_ID={}", sess_id))
        .reply(&web_app)
        .await;
    assert_eq!(res.status(), 200);
    let cookie = parse_cookies(res.headers().get("set-cookie").unwrap().to_str().unwrap());
    assert_eq!(&sess_id, cookie.get_field("SESSION_ID").unwrap());
    assert_eq!(sess.num_sessions().await, 1);
}

#[tokio::test]
async fn test_check_word_against_session_board() {
    let sess = InMemSessionStore::new();
    let web_app = filters::app(test_game(), sess.clone()).recover(handlers::handle_rejection);

    // plant a known board so the expectations are deterministic
    let mut session = Session::default();
    session.board = Some(Board::from_rows(&["CATTT"; 5]).unwrap());
    sess.insert("test-sess", session).await;

    let cases = vec![
        ("cat", "ok"),
        ("impossible", "not-on-board"),
        ("fsjdakfkldsfjdslkfjdlksf", "not-word"),
        ("", "not-word"),
    ];
    for (word, expected) in cases {
        let res = warp::test::request()
            .path(&format!("/check-word?word={}", word))
            .header("cookie", "SESSION_ID=test-sess")
            .reply(&web_app)
            .await;
        assert_eq!(res.status(), 200, "word: {:?}", word);
        let body: serde_json::Value =
            serde_json::from_str(&hyper_bytes_to_string(res.body()).unwrap()).unwrap();
        assert_eq!(body["result"], expected, "word: {:?}", word);
    }
}

#[tokio::test]
async fn test_post_score_updates_record() {
    let sess = InMemSessionStore::new();
    let web_app = filters::app(test_game(), sess.clone()).recover(handlers::handle_rejection);

    sess.insert("test-sess", Session::default()).await;

    let cases = vec![(60, true), (40, false), (60, false)];
    for (score, expected) in cases {
        let res = warp::test::request()
            .path("/post-score")
            .method("POST")
            .header("content-type", "application/json")
            .header("cookie", "SESSION_ID=test-sess")
            .body(format!("{{\"score\": {}}}", score))
            .reply(&web_app)
            .await;
        assert_eq!(res.status(), 200, "score: {}", score);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["isNewRecord"], expected, "score: {}", score);
    }

    let session = sess.get("test-sess").await.unwrap();
    assert_eq!(session.record.highest_score, 60);
    assert_eq!(session.record.num_tries, 3);

    // the next board response reports the updated stats
    let res = warp::test::request()
        .path("/")
        .header("cookie", "SESSION_ID=test-sess")
        .reply(&web_app)
        .await;
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body["highest_score"], 60);
    assert_eq!(body["num_tries"], 3);
}

#[tokio::test]
async fn test_requests_without_session_are_rejected() {
    let sess = InMemSessionStore::new();
    let web_app = filters::app(test_game(), sess.clone()).recover(handlers::handle_rejection);

    // no cookie at all
    let res = warp::test::request()
        .path("/check-word?word=cat")
        .reply(&web_app)
        .await;
    assert_eq!(res.status(), 400);
    let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
    assert!(body["error"].is_string());

    // cookie that maps to nothing
    let res = warp::test::request()
        .path("/check-word?word=cat")
        .header("cookie", "SESSION_ID=who-dis")
        .reply(&web_app)
        .await;
    assert_eq!(res.status(), 400);

    let res = warp::test::request()
        .path("/post-score")
        .method("POST")
        .header("content-type", "application/json")
        .body("{\"score\": 10}")
        .reply(&web_app)
        .await;
    assert_eq!(res.status(), 400);

    // session exists but no board was ever dealt
    sess.insert("fresh", Session::default()).await;
    let res = warp::test::request()
        .path("/check-word?word=cat")
        .header("cookie", "SESSION_ID=fresh")
        .reply(&web_app)
        .await;
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn test_malformed_score_body_is_rejected() {
    let sess = InMemSessionStore::new();
    let web_app = filters::app(test_game(), sess.clone()).recover(handlers::handle_rejection);
    sess.insert("test-sess", Session::default()).await;

    let res = warp::test::request()
        .path("/post-score")
        .method("POST")
        .header("content-type", "application/json")
        .header("cookie", "SESSION_ID=test-sess")
        .body("{\"score\": -5}")
        .reply(&web_app)
        .await;
    assert_eq!(res.status(), 400);
    let session = sess.get("test-sess").await.unwrap();
    assert_eq!(session.record.num_tries, 0);
}
