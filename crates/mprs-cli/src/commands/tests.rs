use clap::Parser;
use mprs_config::MprsConfig;
use mprs_core::enums::QualityStateType;
use mprs_db::error::SyncError;
use mprs_db::service::ReportService;
use mprs_db::sync::SyncState;
use pretty_assertions::assert_eq;

use crate::cli::Cli;
use crate::commands::dispatch::dispatch;
use crate::context::AppContext;

async fn test_context() -> AppContext {
    AppContext {
        service: ReportService::open_local(":memory:", ":memory:")
            .await
            .expect("in-memory service"),
        config: MprsConfig::default(),
    }
}

async fn exec(ctx: &AppContext, args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("mprs").chain(args.iter().copied()))
        .expect("cli should parse");
    let flags = cli.global_flags();
    dispatch(cli.command, ctx, &flags).await
}

fn sync_key(error: &anyhow::Error) -> &'static str {
    error
        .downcast_ref::<SyncError>()
        .map_or("other", SyncError::key)
}

const BEDROOM: &str = r#"{"reportId":1,"bedroomName":"A","conditionLevel":"HIGH"}"#;

#[tokio::test]
async fn create_stores_and_indexes() {
    let ctx = test_context().await;
    exec(&ctx, &["create", "bedroom", "--data", BEDROOM])
        .await
        .expect("create should succeed");

    let bedrooms = ctx.service.bedrooms();
    assert_eq!(bedrooms.count_store().await.unwrap(), 1);
    assert_eq!(bedrooms.count_index().await.unwrap(), 1);
    assert_eq!(bedrooms.sync_state(1).await.unwrap(), SyncState::Synced);
}

#[tokio::test]
async fn create_with_id_is_rejected() {
    let ctx = test_context().await;
    let err = exec(
        &ctx,
        &["create", "author", "--data", r#"{"id":9,"name":"Kim","contactInfo":"x"}"#],
    )
    .await
    .expect_err("create with id should fail");
    assert_eq!(sync_key(&err), "idexists");
    assert_eq!(ctx.service.authors().count_store().await.unwrap(), 0);
}

#[tokio::test]
async fn patch_changes_only_given_field() {
    let ctx = test_context().await;
    exec(&ctx, &["create", "bedroom", "--data", BEDROOM]).await.unwrap();
    exec(
        &ctx,
        &["patch", "bedroom", "1", "--data", r#"{"id":1,"conditionLevel":"MIDDLE"}"#],
    )
    .await
    .expect("patch should succeed");

    let bedroom = ctx.service.bedrooms().find_one(1).await.unwrap().unwrap();
    assert_eq!(bedroom.condition_level, QualityStateType::Middle);
    assert_eq!(bedroom.bedroom_name, "A");
    assert_eq!(
        ctx.service.bedrooms().sync_state(1).await.unwrap(),
        SyncState::Synced
    );
}

#[tokio::test]
async fn patch_id_mismatches_are_bad_requests() {
    let ctx = test_context().await;
    exec(&ctx, &["create", "bedroom", "--data", BEDROOM]).await.unwrap();

    let missing = exec(
        &ctx,
        &["patch", "bedroom", "1", "--data", r#"{"remarks":"x"}"#],
    )
    .await
    .expect_err("patch without body id should fail");
    assert_eq!(sync_key(&missing), "idnull");

    let mismatched = exec(
        &ctx,
        &["patch", "bedroom", "1", "--data", r#"{"id":2,"remarks":"x"}"#],
    )
    .await
    .expect_err("patch with other id should fail");
    assert_eq!(sync_key(&mismatched), "idinvalid");
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let ctx = test_context().await;
    let err = exec(
        &ctx,
        &[
            "update",
            "bedroom",
            "5",
            "--data",
            r#"{"id":5,"reportId":1,"bedroomName":"B","conditionLevel":"LOW"}"#,
        ],
    )
    .await
    .expect_err("update should fail");
    assert_eq!(sync_key(&err), "idnotfound");
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let ctx = test_context().await;
    let err = exec(&ctx, &["get", "kitchen", "3"])
        .await
        .expect_err("get should fail");
    assert_eq!(sync_key(&err), "idnotfound");
}

#[tokio::test]
async fn delete_removes_from_both_sides() {
    let ctx = test_context().await;
    exec(&ctx, &["create", "bedroom", "--data", BEDROOM]).await.unwrap();
    exec(&ctx, &["delete", "bedroom", "1"])
        .await
        .expect("delete should succeed");

    assert_eq!(
        ctx.service.bedrooms().sync_state(1).await.unwrap(),
        SyncState::Absent
    );
}

#[tokio::test]
async fn read_commands_succeed_on_empty_databases() {
    let ctx = test_context().await;
    for args in [
        &["list", "report"][..],
        &["list", "bedroom", "--parent", "1", "--sort", "bedroomName,desc"][..],
        &["search", "kitchen"][..],
        &["search", "kitchen", "tile*", "--size", "5"][..],
        &["count"][..],
        &["count", "living-room"][..],
        &["status", "entrance", "1"][..],
        &["reindex"][..],
        &["reindex", "env-factor"][..],
        &["schema", "infrastructure", "--patch"][..],
    ] {
        exec(&ctx, args)
            .await
            .unwrap_or_else(|error| panic!("{args:?} failed: {error:#}"));
    }
}

#[tokio::test]
async fn list_by_parent_on_author_is_validation_error() {
    let ctx = test_context().await;
    let err = exec(&ctx, &["list", "author", "--parent", "1"])
        .await
        .expect_err("author has no parent");
    assert_eq!(sync_key(&err), "validation");
}

#[tokio::test]
async fn invalid_body_is_rejected_before_store() {
    let ctx = test_context().await;
    let err = exec(
        &ctx,
        &["create", "bedroom", "--data", r#"{"reportId":1,"bedroomName":"  ","conditionLevel":"HIGH"}"#],
    )
    .await
    .expect_err("blank name should fail");
    assert_eq!(sync_key(&err), "validation");
    assert_eq!(ctx.service.bedrooms().count_store().await.unwrap(), 0);
}
