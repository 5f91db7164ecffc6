pub mod card;
pub mod experience;
