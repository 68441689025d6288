// Application state and the intents that drive it
pub mod state;

pub use state::{AppState, Effect, Intent, LoadedAnalysis, RequestForm};
