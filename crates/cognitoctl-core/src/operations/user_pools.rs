//! User pool operations

use clap::Args;
use serde::{Deserialize, Serialize};

use super::{EmptyResponse, operation};
use crate::descriptor::{CommandDescriptor, OutputShape, Verb};
use crate::model::{SchemaAttribute, UserPool, UserPoolDescription};
use crate::parse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoolsRequest {
    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Maximum number of pools to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AddCustomAttributesRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Schema attribute to add, as JSON or @file (repeatable)
    #[arg(long = "custom-attribute", value_parser = parse::json_value::<SchemaAttribute>)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_attributes: Option<Vec<SchemaAttribute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct GetSigningCertificateRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeUserPoolResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool: Option<UserPool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserPoolsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pools: Option<Vec<UserPoolDescription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSigningCertificateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

operation!(DescribeUserPoolRequest => DescribeUserPoolResponse, describe_user_pool, CommandDescriptor {
    operation: "DescribeUserPool",
    verb: Verb::Get,
    noun: "user-pool",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("UserPool"),
    pass_thru: None,
});

operation!(ListUserPoolsRequest => ListUserPoolsResponse, list_user_pools, CommandDescriptor {
    operation: "ListUserPools",
    verb: Verb::Get,
    noun: "user-pool-list",
    pipeline_param: "NextToken",
    resource_param: "NextToken",
    output: OutputShape::Field("UserPools"),
    pass_thru: None,
});

operation!(AddCustomAttributesRequest => EmptyResponse, add_custom_attributes, CommandDescriptor {
    operation: "AddCustomAttributes",
    verb: Verb::Add,
    noun: "custom-attribute",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Nothing,
    pass_thru: Some("UserPoolId"),
});

operation!(GetSigningCertificateRequest => GetSigningCertificateResponse, get_signing_certificate, CommandDescriptor {
    operation: "GetSigningCertificate",
    verb: Verb::Get,
    noun: "signing-certificate",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("Certificate"),
    pass_thru: None,
});

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_custom_attributes_payload_nests_schema() {
        let request = AddCustomAttributesRequest {
            user_pool_id: Some("us-east-1_ABC123".to_string()),
            custom_attributes: Some(vec![SchemaAttribute {
                name: Some("tier".to_string()),
                attribute_data_type: Some("String".to_string()),
                mutable: Some(false),
                ..Default::default()
            }]),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "UserPoolId": "us-east-1_ABC123",
                "CustomAttributes": [
                    {"Name": "tier", "AttributeDataType": "String", "Mutable": false}
                ]
            })
        );
    }
}
