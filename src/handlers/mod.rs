pub mod blog;
pub mod contact;
