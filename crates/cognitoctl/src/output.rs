//! Output rendering for emitted values
//!
//! Every emitted item goes through [`render`]: optional JMESPath filtering,
//! then JSON, YAML or a table.

use anyhow::{Context, Result};
use comfy_table::Table;
use jpx_core::Runtime;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

/// Global JMESPath runtime with extended functions
static JMESPATH_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn jmespath_runtime() -> &'static Runtime {
    JMESPATH_RUNTIME.get_or_init(|| Runtime::builder().with_all_extensions().build())
}

/// Normalize backtick literals in JMESPath expressions.
///
/// JMESPath allows "elided quotes" in backtick literals (`` `foo` `` means
/// `` `"foo"` ``) but the runtime requires valid JSON inside backticks, so
/// anything that doesn't parse as JSON is quoted.
fn normalize_backtick_literals(query: &str) -> String {
    static BACKTICK_RE: OnceLock<Regex> = OnceLock::new();
    let re = BACKTICK_RE.get_or_init(|| Regex::new(r"`([^`\\]*(?:\\.[^`\\]*)*)`").unwrap());

    re.replace_all(query, |caps: &regex::Captures| {
        let content = &caps[1];
        let trimmed = content.trim();

        if serde_json::from_str::<Value>(trimmed).is_ok() {
            format!("`{}`", content)
        } else {
            let escaped = trimmed.replace('\\', "\\\\").replace('"', "\\\"");
            format!("`\"{}\"`", escaped)
        }
    })
    .into_owned()
}

/// Compile a JMESPath expression using the extended runtime.
pub fn compile_jmespath(
    query: &str,
) -> Result<jpx_core::Expression<'static>, jpx_core::JmespathError> {
    jmespath_runtime().compile(&normalize_backtick_literals(query))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl From<crate::cli::OutputFormat> for OutputFormat {
    fn from(format: crate::cli::OutputFormat) -> Self {
        match format {
            crate::cli::OutputFormat::Auto | crate::cli::OutputFormat::Json => Self::Json,
            crate::cli::OutputFormat::Yaml => Self::Yaml,
            crate::cli::OutputFormat::Table => Self::Table,
        }
    }
}

/// Render `data` in `format`, after applying `query` if given.
pub fn render<T: Serialize>(data: T, format: OutputFormat, query: Option<&str>) -> Result<String> {
    let mut json_value = serde_json::to_value(data)?;

    if let Some(query_str) = query {
        let expr = compile_jmespath(query_str)
            .with_context(|| format!("Invalid JMESPath expression: {}", query_str))?;
        json_value = expr.search(&json_value).context("JMESPath query failed")?;
    }

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json_value)?,
        OutputFormat::Yaml => serde_yaml::to_string(&json_value)?.trim_end().to_string(),
        OutputFormat::Table => render_table(&json_value),
    })
}

pub fn print_output<T: Serialize>(data: T, format: OutputFormat, query: Option<&str>) -> Result<()> {
    println!("{}", render(data, format, query)?);
    Ok(())
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            let mut table = Table::new();

            if let Value::Object(first) = &arr[0] {
                let headers: Vec<String> = first.keys().cloned().collect();
                table.set_header(&headers);

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| format_value(obj.get(h).unwrap_or(&Value::Null)))
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![format_value(item)]);
                }
            }

            table.to_string()
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["Name", "Value"]);

            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_value(val)]);
            }

            table.to_string()
        }
        _ => format_value(value),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) if arr.iter().all(|v| !v.is_object() && !v.is_array()) => arr
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_backtick_unquoted_string() {
        assert_eq!(
            normalize_backtick_literals(r#"[?Enabled==`true` && UserStatus==`CONFIRMED`]"#),
            r#"[?Enabled==`true` && UserStatus==`"CONFIRMED"`]"#
        );
    }

    #[test]
    fn test_normalize_backtick_leaves_json_alone() {
        for literal in [r#"`"quoted"`"#, "`123`", "`null`", "`[1, 2]`"] {
            assert_eq!(normalize_backtick_literals(literal), literal);
        }
    }

    #[test]
    fn test_render_json_with_query() {
        let users = json!([
            {"Username": "alice", "Enabled": true},
            {"Username": "bob", "Enabled": false}
        ]);
        let rendered = render(&users, OutputFormat::Json, Some("[?Enabled].Username")).unwrap();
        assert_eq!(rendered, "[\n  \"alice\"\n]");
    }

    #[test]
    fn test_render_invalid_query_fails() {
        let err = render(json!({}), OutputFormat::Json, Some("[?")).unwrap_err();
        assert!(err.to_string().contains("Invalid JMESPath expression"));
    }

    #[test]
    fn test_render_yaml() {
        let rendered = render(json!({"GroupName": "Admins"}), OutputFormat::Yaml, None).unwrap();
        assert_eq!(rendered, "GroupName: Admins");
    }

    #[test]
    fn test_render_table_object_and_list() {
        let group = json!({"GroupName": "Admins", "Precedence": 1});
        let rendered = render(&group, OutputFormat::Table, None).unwrap();
        assert!(rendered.contains("GroupName"));
        assert!(rendered.contains("Admins"));

        let groups = json!([{"GroupName": "Admins"}, {"GroupName": "Readers"}]);
        let rendered = render(&groups, OutputFormat::Table, None).unwrap();
        assert!(rendered.contains("Readers"));
    }

    #[test]
    fn test_render_scalar_for_pass_thru() {
        let rendered = render(json!("us-east-1_dk1"), OutputFormat::Table, None).unwrap();
        assert_eq!(rendered, "us-east-1_dk1");
    }

    #[test]
    fn test_format_value_lists() {
        assert_eq!(format_value(&json!(["email", "phone_number"])), "email, phone_number");
        assert_eq!(format_value(&json!([{"Name": "a"}])), "[1 items]");
    }
}
