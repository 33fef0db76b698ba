//! `othello-server` exposes one shared [`othello_rules::Game`] over HTTP and
//! serves the browser front-end that plays it.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::SharedGame;
