pub mod login;
pub mod section;
pub mod shell;
