use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::shared::kind::with_record;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => {
            with_record!(args.kind, E => commands::create::run::<E>(&args.data, ctx, flags).await)
        }
        Commands::Get(args) => {
            with_record!(args.kind, E => commands::get::run::<E>(args.id, ctx, flags).await)
        }
        Commands::Update(args) => with_record!(args.kind, E => {
            commands::update::run::<E>(args.id, &args.data, ctx, flags).await
        }),
        Commands::Patch(args) => with_record!(args.kind, E => {
            commands::patch::run::<E>(args.id, &args.data, ctx, flags).await
        }),
        Commands::Delete(args) => {
            with_record!(args.kind, E => commands::delete::run::<E>(args.id, ctx, flags).await)
        }
        Commands::List(args) => {
            with_record!(args.kind, E => commands::list::run::<E>(&args, ctx, flags).await)
        }
        Commands::Search(args) => {
            with_record!(args.kind, E => commands::search::run::<E>(&args, ctx, flags).await)
        }
        Commands::Status(args) => {
            with_record!(args.kind, E => commands::status::run::<E>(args.id, ctx, flags).await)
        }
        Commands::Count(args) => commands::count::handle(args.kind, ctx, flags).await,
        Commands::Reindex(args) => commands::reindex::handle(args.kind, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
