pub mod forgot_password;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod verify_email;

pub use forgot_password::*;
pub use home::*;
pub use login::*;
pub use profile::*;
pub use register::*;
pub use reset_password::*;
pub use verify_email::*;
