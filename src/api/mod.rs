pub mod like;
pub mod room;
