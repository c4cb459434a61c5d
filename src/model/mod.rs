// File: ./src/model/mod.rs
pub mod adapter;
pub mod display;
pub mod item;
pub mod parser;
pub mod series;

pub use item::{CourseRecord, LectureItem, SeriesItem, SeriesMode};
