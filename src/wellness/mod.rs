//! Mood support and fitness planning

pub mod content;
pub mod fitness;
pub mod mood;
pub mod reply;

pub use content::{ContentLibrary, StaticContent};
pub use fitness::{select_fitness_plan, FitnessPlan};
pub use mood::Mood;
pub use reply::{compose_reply, MoodReply};
