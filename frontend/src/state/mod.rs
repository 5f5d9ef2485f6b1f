pub mod flow;
pub mod otp_flow;
pub mod session;
