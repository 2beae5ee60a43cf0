pub mod count;
pub mod create;
pub mod delete;
pub mod dispatch;
pub mod get;
pub mod list;
pub mod patch;
pub mod reindex;
pub mod schema;
pub mod search;
pub mod shared;
pub mod status;
pub mod update;

#[cfg(test)]
mod tests;
