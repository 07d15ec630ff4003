//! Cognitive Typology - personality type inference from questionnaire answers
//!
//! Answers to a fixed yes/no question bank are scored into eight cognitive
//! functions, ordered into a four-slot function stack and matched against the
//! sixteen canonical archetypes. Each stage is an interchangeable strategy.

pub mod application;
pub mod config;
pub mod domain;
