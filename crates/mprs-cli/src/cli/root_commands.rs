use clap::{Args, Subcommand};
use mprs_core::enums::EntityKind;

/// Top-level commands. Every record command takes the entity kind first
/// (`report`, `author`, `bathroom`, `bedroom`, `entrance`, `env-factor`,
/// `infrastructure`, `kitchen`, `living-room`).
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a record from a JSON body (no id).
    Create(CreateArgs),
    /// Get a record by id from the store.
    Get(TargetArgs),
    /// Replace every field of a record.
    Update(WriteArgs),
    /// Merge the given fields into a record.
    Patch(WriteArgs),
    /// Delete a record from the store and the search index.
    Delete(TargetArgs),
    /// List records from the store.
    List(ListArgs),
    /// Full-text search over the index.
    Search(SearchArgs),
    /// Store and index document counts.
    Count(KindFilterArgs),
    /// Compare the store and index copies of one record.
    Status(TargetArgs),
    /// Rebuild the search index from the store.
    Reindex(KindFilterArgs),
    /// Print the JSON schema of a record body.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    pub kind: EntityKind,

    /// Record body as JSON
    #[arg(long)]
    pub data: String,
}

#[derive(Clone, Debug, Args)]
pub struct TargetArgs {
    pub kind: EntityKind,
    pub id: i64,
}

#[derive(Clone, Debug, Args)]
pub struct WriteArgs {
    pub kind: EntityKind,
    pub id: i64,

    /// Record body as JSON; must carry the same `id`
    #[arg(long)]
    pub data: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    pub kind: EntityKind,

    /// Only records whose parent reference equals this id
    #[arg(long)]
    pub parent: Option<i64>,

    /// Sort as `column` or `column,asc|desc`
    #[arg(long)]
    pub sort: Option<String>,

    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    pub page: u32,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub kind: EntityKind,

    /// FTS5 query; omitted or `*` matches everything
    pub query: Option<String>,

    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    pub page: u32,
}

#[derive(Clone, Debug, Args)]
pub struct KindFilterArgs {
    /// Limit to one kind (default: all kinds)
    pub kind: Option<EntityKind>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub kind: EntityKind,

    /// Print the partial-update body instead of the full record
    #[arg(long)]
    pub patch: bool,
}
