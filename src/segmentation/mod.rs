pub mod client;
pub mod response;

pub use client::parse_texts;
pub use response::{
    FuriganaPart,
    RawParse,
    RawToken,
    RawVocabulary,
};
