//! Pipeline input
//!
//! A command whose pipeline-bound parameter is given as `-` runs once per
//! non-blank line of input. Each line is one of:
//!
//! - a JSON object, whose members bind by wire name, ignoring ASCII case.
//!   The pipeline parameter always comes from the object; other members only
//!   fill parameters that were not given on the command line. Members that
//!   name no parameter are ignored.
//! - a JSON string, bound to the pipeline parameter.
//! - anything else, bound verbatim to the pipeline parameter.
//!
//! Items are bound independently so one malformed line does not stop the rest.

use std::io::BufRead;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::descriptor::Operation;

/// Parameter value that means "read items from stdin"
pub const PIPELINE_MARKER: &str = "-";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read pipeline input: {0}")]
    Read(#[from] std::io::Error),

    #[error("Pipeline item on line {line}: {message}")]
    Bind { line: usize, message: String },

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Returns true when `request` asks for pipeline input.
pub fn reads_pipeline<O: Operation>(request: &O) -> bool {
    serde_json::to_value(request)
        .ok()
        .and_then(|payload| {
            payload
                .get(O::DESCRIPTOR.pipeline_param)
                .map(|v| v == PIPELINE_MARKER)
        })
        .unwrap_or(false)
}

/// Expand `request` into the requests to invoke.
///
/// Without pipeline input this is just the request itself. Otherwise every
/// non-blank line of `input` yields one item, bound or failed.
pub fn expand<O: Operation, R: BufRead>(
    request: O,
    input: R,
) -> Result<Vec<Result<O, PipelineError>>, PipelineError> {
    let param = O::DESCRIPTOR.pipeline_param;
    let Value::Object(base) = serde_json::to_value(&request)? else {
        return Ok(vec![Ok(request)]);
    };
    if base.get(param).is_none_or(|v| v != PIPELINE_MARKER) {
        return Ok(vec![Ok(request)]);
    }

    let mut items = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let item = bind_line::<O>(&base, param, text).map_err(|message| PipelineError::Bind {
            line: index + 1,
            message,
        });
        items.push(item);
    }

    debug!(
        operation = O::DESCRIPTOR.operation,
        items = items.len(),
        "Expanded pipeline input"
    );
    Ok(items)
}

fn bind_line<O: Operation>(
    base: &Map<String, Value>,
    param: &str,
    text: &str,
) -> Result<O, String> {
    let mut bound = base.clone();

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(item)) => {
            let value = item
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(param))
                .map(|(_, v)| v.clone())
                .ok_or_else(|| format!("object has no {param} property"))?;
            bound.insert(param.to_string(), value);

            let fields = wire_fields::<O>();
            for (key, value) in item {
                if key.eq_ignore_ascii_case(param) {
                    continue;
                }
                let Some(name) = fields.iter().find(|f| f.eq_ignore_ascii_case(&key)) else {
                    continue;
                };
                bound.entry((*name).to_string()).or_insert(value);
            }
        }
        Ok(Value::String(value)) => {
            bound.insert(param.to_string(), Value::String(value));
        }
        _ => {
            bound.insert(param.to_string(), Value::String(text.to_string()));
        }
    }

    serde_json::from_value(Value::Object(bound)).map_err(|e| e.to_string())
}

/// Wire names of the request's fields, as its `Deserialize` impl declares them.
fn wire_fields<O: Operation>() -> &'static [&'static str] {
    let mut fields: &'static [&'static str] = &[];
    let _ = O::deserialize(FieldNames {
        fields: &mut fields,
    });
    fields
}

/// A deserializer that records the field list of the struct asked for and
/// produces nothing.
struct FieldNames<'a> {
    fields: &'a mut &'static [&'static str],
}

impl<'de> Deserializer<'de> for FieldNames<'_> {
    type Error = de::value::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("not a struct"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        *self.fields = fields;
        Err(de::Error::custom("field names recorded"))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{
        AdminGetUserRequest, AdminListDevicesRequest, DeleteGroupRequest, GetGroupRequest,
    };
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn piped_get_group() -> GetGroupRequest {
        GetGroupRequest {
            group_name: Some(PIPELINE_MARKER.to_string()),
            user_pool_id: Some("us-east-1_ABC123".to_string()),
        }
    }

    #[test]
    fn test_without_marker_returns_request() {
        let request = GetGroupRequest {
            group_name: Some("Admins".to_string()),
            user_pool_id: Some("us-east-1_ABC123".to_string()),
        };
        assert!(!reads_pipeline(&request));

        let items = expand(request.clone(), Cursor::new("ignored\n")).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].as_ref().unwrap(), &request);
    }

    #[test]
    fn test_marker_only_counts_on_pipeline_param() {
        let request = GetGroupRequest {
            group_name: Some("Admins".to_string()),
            user_pool_id: Some(PIPELINE_MARKER.to_string()),
        };
        assert!(!reads_pipeline(&request));
        assert!(reads_pipeline(&piped_get_group()));
    }

    #[test]
    fn test_bare_and_string_lines() {
        let input = "Admins\n\n\"Readers\"\n   \nWriters\n";
        let items = expand(piped_get_group(), Cursor::new(input)).unwrap();

        let names: Vec<_> = items
            .into_iter()
            .map(|item| item.unwrap().group_name.unwrap())
            .collect();
        assert_eq!(names, vec!["Admins", "Readers", "Writers"]);
    }

    #[test]
    fn test_object_lines_bind_by_property_name() {
        let request = DeleteGroupRequest {
            group_name: Some(PIPELINE_MARKER.to_string()),
            user_pool_id: None,
        };
        let input = r#"{"GroupName": "Admins", "UserPoolId": "eu-west-1_XYZ", "Precedence": 3}"#;
        let items = expand(request, Cursor::new(input)).unwrap();

        let item = items.into_iter().next().unwrap().unwrap();
        assert_eq!(item.group_name.as_deref(), Some("Admins"));
        assert_eq!(item.user_pool_id.as_deref(), Some("eu-west-1_XYZ"));
    }

    #[test]
    fn test_command_line_values_win_over_object_members() {
        let input = r#"{"GroupName": "Admins", "UserPoolId": "eu-west-1_XYZ"}"#;
        let items = expand(piped_get_group(), Cursor::new(input)).unwrap();

        let item = items.into_iter().next().unwrap().unwrap();
        assert_eq!(item.group_name.as_deref(), Some("Admins"));
        assert_eq!(item.user_pool_id.as_deref(), Some("us-east-1_ABC123"));
    }

    #[test]
    fn test_object_members_match_wire_names_in_any_case() {
        let request = DeleteGroupRequest {
            group_name: Some(PIPELINE_MARKER.to_string()),
            user_pool_id: None,
        };
        let input = r#"{"GroupName": "a", "userPoolId": "p"}"#;
        let items = expand(request, Cursor::new(input)).unwrap();

        let item = items.into_iter().next().unwrap().unwrap();
        assert_eq!(item.group_name.as_deref(), Some("a"));
        assert_eq!(item.user_pool_id.as_deref(), Some("p"));
    }

    #[test]
    fn test_lowercase_member_does_not_override_command_line() {
        let request = AdminListDevicesRequest {
            user_pool_id: Some("us-east-1_ABC123".to_string()),
            username: Some(PIPELINE_MARKER.to_string()),
            limit: Some(10),
            pagination_token: None,
        };
        let input = r#"{"username": "alice", "LIMIT": 99, "paginationtoken": "t1"}"#;
        let items = expand(request, Cursor::new(input)).unwrap();

        let item = items.into_iter().next().unwrap().unwrap();
        assert_eq!(item.username.as_deref(), Some("alice"));
        assert_eq!(item.limit, Some(10));
        assert_eq!(item.pagination_token.as_deref(), Some("t1"));
    }

    #[test]
    fn test_wire_fields_lists_request_members() {
        assert_eq!(
            wire_fields::<GetGroupRequest>(),
            &["GroupName", "UserPoolId"]
        );
    }

    #[test]
    fn test_bad_items_fail_individually() {
        let request = AdminGetUserRequest {
            user_pool_id: Some("us-east-1_ABC123".to_string()),
            username: Some(PIPELINE_MARKER.to_string()),
        };
        let input = "alice\n{\"Email\": \"bob@example.com\"}\n{\"Username\": 42}\ncarol\n";
        let items = expand(request, Cursor::new(input)).unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(
            items[0].as_ref().unwrap().username.as_deref(),
            Some("alice")
        );
        match &items[1] {
            Err(PipelineError::Bind { line, message }) => {
                assert_eq!(*line, 2);
                assert!(message.contains("Username"));
            }
            other => panic!("expected bind error, got {other:?}"),
        }
        assert!(matches!(items[2], Err(PipelineError::Bind { line: 3, .. })));
        assert_eq!(
            items[3].as_ref().unwrap().username.as_deref(),
            Some("carol")
        );
    }
}
