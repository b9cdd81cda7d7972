// Start of file: /src/utils/mod.rs

/*
    * Error mapping, the error envelope middleware and small JSON helpers.
*/

pub mod error_handler;
pub mod response_handler;
pub mod utils;

// End of file: /src/utils/mod.rs
