pub mod course;
pub mod handicap;
pub mod points;
