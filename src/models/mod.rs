pub mod like_model;
pub mod room_model;
