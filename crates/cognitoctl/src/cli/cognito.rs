//! One subcommand per wrapped Cognito operation
//!
//! Commands are named verb-noun. The API operation name in kebab case is a
//! visible alias wherever it differs.

use clap::Subcommand;
use cognitoctl_core::{CommandDescriptor, Operation};
use cognitoctl_core::operations::*;

use crate::commands::operation::{OperationRunner, run_operation};
use crate::error::Result as CliResult;

#[derive(Subcommand, Debug)]
pub enum CognitoCommands {
    // Groups
    /// Get a group (GetGroup)
    GetGroup(GetGroupRequest),
    /// Create a group (CreateGroup)
    #[command(visible_alias = "create-group")]
    NewGroup(CreateGroupRequest),
    /// Update a group (UpdateGroup)
    UpdateGroup(UpdateGroupRequest),
    /// Delete a group (DeleteGroup)
    #[command(visible_alias = "delete-group")]
    RemoveGroup(DeleteGroupRequest),
    /// List the groups of a user pool (ListGroups)
    #[command(visible_alias = "list-groups")]
    GetGroupList(ListGroupsRequest),
    /// List the users in a group (ListUsersInGroup)
    #[command(visible_alias = "list-users-in-group")]
    GetUsersInGroup(ListUsersInGroupRequest),
    /// Add a user to a group (AdminAddUserToGroup)
    #[command(visible_alias = "admin-add-user-to-group")]
    AddAdminUserToGroup(AdminAddUserToGroupRequest),
    /// Remove a user from a group (AdminRemoveUserFromGroup)
    #[command(visible_alias = "admin-remove-user-from-group")]
    RemoveAdminUserFromGroup(AdminRemoveUserFromGroupRequest),
    /// List the groups a user belongs to (AdminListGroupsForUser)
    #[command(visible_alias = "admin-list-groups-for-user")]
    GetAdminGroupsForUser(AdminListGroupsForUserRequest),

    // Devices
    /// Get a user's device (AdminGetDevice)
    #[command(visible_alias = "admin-get-device")]
    GetAdminDevice(AdminGetDeviceRequest),
    /// List a user's devices (AdminListDevices)
    #[command(visible_alias = "admin-list-devices")]
    GetAdminDeviceList(AdminListDevicesRequest),
    /// Forget a user's device (AdminForgetDevice)
    #[command(visible_alias = "admin-forget-device")]
    RemoveAdminDevice(AdminForgetDeviceRequest),

    // Users
    /// Get a user (AdminGetUser)
    #[command(visible_alias = "admin-get-user")]
    GetAdminUser(AdminGetUserRequest),
    /// List the users of a user pool (ListUsers)
    #[command(visible_alias = "list-users")]
    GetUserList(ListUsersRequest),
    /// Disable a user (AdminDisableUser)
    #[command(visible_alias = "admin-disable-user")]
    DisableAdminUser(AdminDisableUserRequest),
    /// Enable a user (AdminEnableUser)
    #[command(visible_alias = "admin-enable-user")]
    EnableAdminUser(AdminEnableUserRequest),
    /// Delete a user (AdminDeleteUser)
    #[command(visible_alias = "admin-delete-user")]
    RemoveAdminUser(AdminDeleteUserRequest),
    /// Reset a user's password (AdminResetUserPassword)
    #[command(visible_alias = "admin-reset-user-password")]
    ResetAdminUserPassword(AdminResetUserPasswordRequest),
    /// Update a user's attributes (AdminUpdateUserAttributes)
    #[command(visible_alias = "admin-update-user-attributes")]
    UpdateAdminUserAttribute(AdminUpdateUserAttributesRequest),

    // User pools
    /// Describe a user pool (DescribeUserPool)
    #[command(visible_alias = "describe-user-pool")]
    GetUserPool(DescribeUserPoolRequest),
    /// List user pools (ListUserPools)
    #[command(visible_alias = "list-user-pools")]
    GetUserPoolList(ListUserPoolsRequest),
    /// Add custom attributes to a user pool (AddCustomAttributes)
    #[command(visible_alias = "add-custom-attributes")]
    AddCustomAttribute(AddCustomAttributesRequest),
    /// Get the SAML signing certificate (GetSigningCertificate)
    GetSigningCertificate(GetSigningCertificateRequest),

    // User import
    /// Create a user import job (CreateUserImportJob)
    #[command(visible_alias = "create-user-import-job")]
    NewUserImportJob(CreateUserImportJobRequest),
    /// Describe a user import job (DescribeUserImportJob)
    #[command(visible_alias = "describe-user-import-job")]
    GetUserImportJob(DescribeUserImportJobRequest),
    /// Start a user import job (StartUserImportJob)
    StartUserImportJob(StartUserImportJobRequest),
    /// Stop a user import job (StopUserImportJob)
    StopUserImportJob(StopUserImportJobRequest),
    /// List user import jobs (ListUserImportJobs)
    #[command(visible_alias = "list-user-import-jobs")]
    GetUserImportJobList(ListUserImportJobsRequest),
    /// Get the CSV header for user import (GetCSVHeader)
    GetCsvHeader(GetCsvHeaderRequest),

    // UI customization
    /// Get hosted UI customization (GetUICustomization)
    GetUiCustomization(GetUiCustomizationRequest),
    /// Set hosted UI customization (SetUICustomization)
    SetUiCustomization(SetUiCustomizationRequest),
}

/// Expands to a match over every variant, binding the request as `$req`.
macro_rules! for_each_command {
    ($command:expr, $req:ident => $body:expr) => {
        match $command {
            CognitoCommands::GetGroup($req) => $body,
            CognitoCommands::NewGroup($req) => $body,
            CognitoCommands::UpdateGroup($req) => $body,
            CognitoCommands::RemoveGroup($req) => $body,
            CognitoCommands::GetGroupList($req) => $body,
            CognitoCommands::GetUsersInGroup($req) => $body,
            CognitoCommands::AddAdminUserToGroup($req) => $body,
            CognitoCommands::RemoveAdminUserFromGroup($req) => $body,
            CognitoCommands::GetAdminGroupsForUser($req) => $body,
            CognitoCommands::GetAdminDevice($req) => $body,
            CognitoCommands::GetAdminDeviceList($req) => $body,
            CognitoCommands::RemoveAdminDevice($req) => $body,
            CognitoCommands::GetAdminUser($req) => $body,
            CognitoCommands::GetUserList($req) => $body,
            CognitoCommands::DisableAdminUser($req) => $body,
            CognitoCommands::EnableAdminUser($req) => $body,
            CognitoCommands::RemoveAdminUser($req) => $body,
            CognitoCommands::ResetAdminUserPassword($req) => $body,
            CognitoCommands::UpdateAdminUserAttribute($req) => $body,
            CognitoCommands::GetUserPool($req) => $body,
            CognitoCommands::GetUserPoolList($req) => $body,
            CognitoCommands::AddCustomAttribute($req) => $body,
            CognitoCommands::GetSigningCertificate($req) => $body,
            CognitoCommands::NewUserImportJob($req) => $body,
            CognitoCommands::GetUserImportJob($req) => $body,
            CognitoCommands::StartUserImportJob($req) => $body,
            CognitoCommands::StopUserImportJob($req) => $body,
            CognitoCommands::GetUserImportJobList($req) => $body,
            CognitoCommands::GetCsvHeader($req) => $body,
            CognitoCommands::GetUiCustomization($req) => $body,
            CognitoCommands::SetUiCustomization($req) => $body,
        }
    };
}

impl CognitoCommands {
    /// Static metadata of the selected command
    pub fn descriptor(&self) -> CommandDescriptor {
        fn descriptor_of<O: Operation>(_: &O) -> CommandDescriptor {
            O::DESCRIPTOR
        }
        for_each_command!(self, request => descriptor_of(request))
    }

    pub async fn run(self, runner: &OperationRunner<'_>) -> CliResult<()> {
        for_each_command!(self, request => run_operation(runner, request).await)
    }
}
