pub mod anki;
pub mod core;
pub mod persistence;
pub mod reconcile;
pub mod segmentation;

pub use crate::core::{
    config::Config,
    errors::YomikataError,
    models::{
        Annotation,
        Card,
        CardId,
        CardState,
        Grade,
        Ruby,
        Token,
    },
    pipeline::{
        annotate,
        submit_review,
    },
};
