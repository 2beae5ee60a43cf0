use mprs_core::enums::EntityKind;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a `--data` JSON body into a record or patch type.
pub fn parse_body<T>(raw: &str, kind: EntityKind) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw).map_err(|error| anyhow::anyhow!("invalid {kind} body: {error}"))
}

/// Split a patch body into the `id` it carries and the patch fields.
pub fn parse_patch_body<T>(raw: &str, kind: EntityKind) -> anyhow::Result<(Option<i64>, T)>
where
    T: DeserializeOwned,
{
    let value: Value = parse_body(raw, kind)?;
    let id = body_id(&value)?;
    let patch = serde_json::from_value(value)
        .map_err(|error| anyhow::anyhow!("invalid {kind} patch: {error}"))?;
    Ok((id, patch))
}

fn body_id(value: &Value) -> anyhow::Result<Option<i64>> {
    match value.get("id") {
        None | Some(Value::Null) => Ok(None),
        Some(id) => id
            .as_i64()
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("id must be an integer, got {id}")),
    }
}
