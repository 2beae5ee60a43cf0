pub mod body;
pub mod kind;
pub mod page;
