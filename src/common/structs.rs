/// Generic error with a human readable message.
pub mod custom_error;
