//! Group operations

use clap::Args;
use serde::{Deserialize, Serialize};

use super::{EmptyResponse, operation};
use crate::descriptor::{CommandDescriptor, OutputShape, Verb};
use crate::model::{Group, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct GetGroupRequest {
    /// The name of the group
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGroupRequest {
    /// The name of the group to create
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// A description of the group
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// IAM role ARN assumed by members of the group
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// Precedence relative to the user's other groups (lower wins)
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedence: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGroupRequest {
    /// The name of the group to update
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// New description
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New IAM role ARN
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    /// New precedence
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precedence: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteGroupRequest {
    /// The name of the group to delete
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListGroupsRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Maximum number of groups to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersInGroupRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The name of the group
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Maximum number of users to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminAddUserToGroupRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name or alias of the user
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The group to add the user to
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminRemoveUserFromGroupRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name or alias of the user
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The group to remove the user from
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminListGroupsForUserRequest {
    /// The user name or alias of the user
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Maximum number of groups to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Response of `GetGroup`, `CreateGroup` and `UpdateGroup`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
}

/// Response of `ListGroups` and `AdminListGroupsForUser`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUsersInGroupResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

operation!(GetGroupRequest => GroupResponse, get_group, CommandDescriptor {
    operation: "GetGroup",
    verb: Verb::Get,
    noun: "group",
    pipeline_param: "GroupName",
    resource_param: "GroupName",
    output: OutputShape::Field("Group"),
    pass_thru: None,
});

operation!(CreateGroupRequest => GroupResponse, create_group, CommandDescriptor {
    operation: "CreateGroup",
    verb: Verb::New,
    noun: "group",
    pipeline_param: "GroupName",
    resource_param: "GroupName",
    output: OutputShape::Field("Group"),
    pass_thru: None,
});

operation!(UpdateGroupRequest => GroupResponse, update_group, CommandDescriptor {
    operation: "UpdateGroup",
    verb: Verb::Update,
    noun: "group",
    pipeline_param: "GroupName",
    resource_param: "GroupName",
    output: OutputShape::Field("Group"),
    pass_thru: None,
});

operation!(DeleteGroupRequest => EmptyResponse, delete_group, CommandDescriptor {
    operation: "DeleteGroup",
    verb: Verb::Remove,
    noun: "group",
    pipeline_param: "GroupName",
    resource_param: "GroupName",
    output: OutputShape::Nothing,
    pass_thru: Some("GroupName"),
});

operation!(ListGroupsRequest => GroupListResponse, list_groups, CommandDescriptor {
    operation: "ListGroups",
    verb: Verb::Get,
    noun: "group-list",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("Groups"),
    pass_thru: None,
});

operation!(ListUsersInGroupRequest => ListUsersInGroupResponse, list_users_in_group, CommandDescriptor {
    operation: "ListUsersInGroup",
    verb: Verb::Get,
    noun: "users-in-group",
    pipeline_param: "GroupName",
    resource_param: "GroupName",
    output: OutputShape::Field("Users"),
    pass_thru: None,
});

operation!(AdminAddUserToGroupRequest => EmptyResponse, admin_add_user_to_group, CommandDescriptor {
    operation: "AdminAddUserToGroup",
    verb: Verb::Add,
    noun: "admin-user-to-group",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});

operation!(AdminRemoveUserFromGroupRequest => EmptyResponse, admin_remove_user_from_group, CommandDescriptor {
    operation: "AdminRemoveUserFromGroup",
    verb: Verb::Remove,
    noun: "admin-user-from-group",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Nothing,
    pass_thru: Some("Username"),
});

operation!(AdminListGroupsForUserRequest => GroupListResponse, admin_list_groups_for_user, CommandDescriptor {
    operation: "AdminListGroupsForUser",
    verb: Verb::Get,
    noun: "admin-groups-for-user",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Field("Groups"),
    pass_thru: None,
});
