// Start of file: /src/config/mod.rs

/*
* Environment variables and the state handed to every route.
*/

pub mod environment;
pub mod state;

pub use environment::EnvironmentVariables;
pub use state::AppState;

// End of file: /src/config/mod.rs
