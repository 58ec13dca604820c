pub mod api;
pub mod state;

pub use api::CardInfo;
pub use state::{
    classify,
    matching_cards,
};
