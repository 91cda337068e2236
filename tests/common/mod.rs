//! Shared fixtures for integration tests.
//!
//! Provides record builders and a [`fixture_path`] helper for the JSON files
//! under `tests/fixtures`.

#![allow(dead_code)]

use std::path::PathBuf;

use popcorntv_common::{Movie, Person, Show, Torrent};

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A complete, valid movie record.
pub fn make_movie() -> Movie {
    let mut movie = Movie::new(1995, "Heat");
    movie.year = 1995;
    movie.runtime = 125;
    movie.genres = vec!["Crime".to_string(), "Drama".to_string()];
    movie.actors = vec![Person::new("Al Pacino"), Person::new("Robert De Niro")];
    movie.directors = vec![Person::new("Michael Mann")];
    movie.summary = "Bank robbers feel the heat.".to_string();
    movie.description_full = "Hunters & hunted in Los Angeles.".to_string();
    movie.large_cover_image = "http://img/heat-large.jpg".to_string();
    movie.background_image = "http://img/heat-bg.jpg".to_string();
    movie.parallax_poster = "http://img/heat.lsr".to_string();
    movie.mpa_rating = "R".to_string();
    movie.youtube_trailer_url = "https://youtu.be/heat".to_string();
    movie.tomatoes_critics_rating = "Certified".to_string();
    movie.tomatoes_critics_score = 87;
    movie.torrents = vec![Torrent::new("A1B2C3")];
    movie
}

/// Two related movies for the suggestions shelf.
pub fn make_suggestions() -> Vec<Movie> {
    let mut collateral = Movie::new(2004, "Collateral");
    collateral.parallax_poster = "http://img/collateral.lsr".to_string();
    let mut ronin = Movie::new(1998, "Ronin");
    ronin.parallax_poster = "http://img/ronin.lsr".to_string();
    vec![collateral, ronin]
}

/// A complete, valid show record.
pub fn make_show() -> Show {
    let mut show = Show::new("tt0903747", "Breaking Bad");
    show.tvdb_id = Some("81189".to_string());
    show.fanart_image = Some("http://img/bb.jpg".to_string());
    show
}
