pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use config::Config;
pub use errors::YomikataError;
pub use models::{
    Annotation,
    Card,
    CardId,
    CardState,
    Grade,
    Ruby,
    Token,
};
