//! orthoquiz-client: quiz sources and configuration.
//!
//! Implements the `QuizSource` trait for the platform backend and for tests,
//! and loads the orthoquiz configuration file.

pub mod batch;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;

pub use batch::fetch_many;
pub use config::{create_source, load_config_from, OrthoquizConfig};
pub use error::ClientError;
pub use http::HttpQuizSource;
pub use mock::MockQuizSource;
