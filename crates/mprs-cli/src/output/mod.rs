use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use mprs_core::entities::Author;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: i64,
        kind: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: 3, kind: "kitchen" };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 3);
        assert_eq!(parsed["kind"], "kitchen");
        assert!(out.contains('\n'));
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: 3, kind: "kitchen" };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert_eq!(out, r#"{"id":3,"kind":"kitchen"}"#);
    }

    #[test]
    fn entities_render_camel_case() {
        let author = Author {
            id: Some(1),
            name: "Kim".to_string(),
            contact_info: "010-1234-5678".to_string(),
        };
        let out = render(&author, OutputFormat::Raw).expect("raw render should work");
        assert!(out.contains(r#""id":1"#));
        assert!(out.contains(r#""contactInfo":"010-1234-5678""#));
    }
}
