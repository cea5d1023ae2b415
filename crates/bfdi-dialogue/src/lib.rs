//! Character dialogue for the BFDI dashboard
//!
//! Classifies a short forecast into a [`Category`], then resolves a
//! character's reaction from a static [`CharacterTable`].

pub mod category;
pub mod characters;
mod error_mapping;
pub mod payload;
pub mod table;
pub mod theme;

pub use category::Category;
pub use payload::ResponsePayload;
pub use table::{Character, CharacterProfile, CharacterTable, TableError};
pub use theme::Theme;
