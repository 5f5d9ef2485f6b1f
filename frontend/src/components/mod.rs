pub mod common;
pub mod countdown;
pub mod error;
pub mod guard;
pub mod layout;
pub mod otp_input;
