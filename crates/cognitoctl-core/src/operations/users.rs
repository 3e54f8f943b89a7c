//! User administration operations

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use clap::Args;
use serde::{Deserialize, Serialize};

use super::{EmptyResponse, operation};
use crate::descriptor::{CommandDescriptor, OutputShape, Verb};
use crate::model::{Attribute, MfaOption, User};
use crate::parse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminGetUserRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name or alias of the user
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Attributes to return for each user (comma separated or repeated)
    #[arg(long, value_delimiter = ',')]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_get: Option<Vec<String>>,

    /// Maximum number of users to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,

    /// Filter expression, e.g. `email ^= "alice"`
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Request shape shared by the enable/disable/delete user operations
macro_rules! user_request {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            /// The user pool ID
            #[arg(long)]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub user_pool_id: Option<String>,

            /// The user name or alias of the user
            #[arg(long)]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub username: Option<String>,
        }
    };
}

user_request!(AdminDisableUserRequest, "Request for `AdminDisableUser`");
user_request!(AdminEnableUserRequest, "Request for `AdminEnableUser`");
user_request!(AdminDeleteUserRequest, "Request for `AdminDeleteUser`");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminResetUserPasswordRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name or alias of the user
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Key/value pairs passed to Lambda triggers (JSON object or @file)
    #[arg(long, value_parser = parse::string_map)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminUpdateUserAttributesRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name or alias of the user
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Attribute to set, as Name=Value (repeatable)
    #[arg(long = "user-attribute", value_parser = parse::attribute)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<Attribute>>,

    /// Key/value pairs passed to Lambda triggers (JSON object or @file)
    #[arg(long, value_parser = parse::string_map)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<BTreeMap<String, String>>,
}

/// Response of `AdminGetUser`, emitted whole
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminGetUserResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_attributes: Option<Vec<Attribute>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_create_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_last_modified_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_status: Option<String>,
    #[serde(
        default,
        rename = "MFAOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub mfa_options: Option<Vec<MfaOption>>,
    #[serde(
        default,
        rename = "PreferredMfaSetting",
        skip_serializing_if = "Option::is_none"
    )]
    pub preferred_mfa_setting: Option<String>,
    #[serde(
        default,
        rename = "UserMFASettingList",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_mfa_setting_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

operation!(AdminGetUserRequest => AdminGetUserResponse, admin_get_user, CommandDescriptor {
    operation: "AdminGetUser",
    verb: Verb::Get,
    noun: "admin-user",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Whole,
    pass_thru: None,
});

operation!(ListUsersRequest => ListUsersResponse, list_users, CommandDescriptor {
    operation: "ListUsers",
    verb: Verb::Get,
    noun: "user-list",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("Users"),
    pass_thru: None,
});

operation!(AdminDisableUserRequest => EmptyResponse, admin_disable_user, CommandDescriptor {
    operation: "AdminDisableUser",
    verb: Verb::Disable,
    noun: "admin-user",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});

operation!(AdminEnableUserRequest => EmptyResponse, admin_enable_user, CommandDescriptor {
    operation: "AdminEnableUser",
    verb: Verb::Enable,
    noun: "admin-user",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});

operation!(AdminDeleteUserRequest => EmptyResponse, admin_delete_user, CommandDescriptor {
    operation: "AdminDeleteUser",
    verb: Verb::Remove,
    noun: "admin-user",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});

operation!(AdminResetUserPasswordRequest => EmptyResponse, admin_reset_user_password, CommandDescriptor {
    operation: "AdminResetUserPassword",
    verb: Verb::Reset,
    noun: "admin-user-password",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});

operation!(AdminUpdateUserAttributesRequest => EmptyResponse, admin_update_user_attributes, CommandDescriptor {
    operation: "AdminUpdateUserAttributes",
    verb: Verb::Update,
    noun: "admin-user-attribute",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});
