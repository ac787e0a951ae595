pub mod reset_password;
pub mod signup;
