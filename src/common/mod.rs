pub mod check_errors;
pub mod secret;
