pub mod board;
pub mod game;
pub mod move_list;
pub mod rules;
