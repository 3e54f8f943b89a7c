//! The remote service seam
//!
//! One async method per wrapped operation. [`crate::sdk::SdkCognitoApi`]
//! implements it over the AWS SDK client; tests use the generated mock.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::operations::*;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CognitoApi: Send + Sync {
    // Groups
    async fn get_group(&self, request: GetGroupRequest) -> Result<GroupResponse, ApiError>;
    async fn create_group(&self, request: CreateGroupRequest) -> Result<GroupResponse, ApiError>;
    async fn update_group(&self, request: UpdateGroupRequest) -> Result<GroupResponse, ApiError>;
    async fn delete_group(&self, request: DeleteGroupRequest) -> Result<EmptyResponse, ApiError>;
    async fn list_groups(&self, request: ListGroupsRequest)
    -> Result<GroupListResponse, ApiError>;
    async fn list_users_in_group(
        &self,
        request: ListUsersInGroupRequest,
    ) -> Result<ListUsersInGroupResponse, ApiError>;
    async fn admin_add_user_to_group(
        &self,
        request: AdminAddUserToGroupRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn admin_remove_user_from_group(
        &self,
        request: AdminRemoveUserFromGroupRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn admin_list_groups_for_user(
        &self,
        request: AdminListGroupsForUserRequest,
    ) -> Result<GroupListResponse, ApiError>;

    // Devices
    async fn admin_get_device(
        &self,
        request: AdminGetDeviceRequest,
    ) -> Result<AdminGetDeviceResponse, ApiError>;
    async fn admin_list_devices(
        &self,
        request: AdminListDevicesRequest,
    ) -> Result<AdminListDevicesResponse, ApiError>;
    async fn admin_forget_device(
        &self,
        request: AdminForgetDeviceRequest,
    ) -> Result<EmptyResponse, ApiError>;

    // Users
    async fn admin_get_user(
        &self,
        request: AdminGetUserRequest,
    ) -> Result<AdminGetUserResponse, ApiError>;
    async fn list_users(&self, request: ListUsersRequest) -> Result<ListUsersResponse, ApiError>;
    async fn admin_disable_user(
        &self,
        request: AdminDisableUserRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn admin_enable_user(
        &self,
        request: AdminEnableUserRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn admin_delete_user(
        &self,
        request: AdminDeleteUserRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn admin_reset_user_password(
        &self,
        request: AdminResetUserPasswordRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn admin_update_user_attributes(
        &self,
        request: AdminUpdateUserAttributesRequest,
    ) -> Result<EmptyResponse, ApiError>;

    // User pools
    async fn describe_user_pool(
        &self,
        request: DescribeUserPoolRequest,
    ) -> Result<DescribeUserPoolResponse, ApiError>;
    async fn list_user_pools(
        &self,
        request: ListUserPoolsRequest,
    ) -> Result<ListUserPoolsResponse, ApiError>;
    async fn add_custom_attributes(
        &self,
        request: AddCustomAttributesRequest,
    ) -> Result<EmptyResponse, ApiError>;
    async fn get_signing_certificate(
        &self,
        request: GetSigningCertificateRequest,
    ) -> Result<GetSigningCertificateResponse, ApiError>;

    // User import
    async fn create_user_import_job(
        &self,
        request: CreateUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError>;
    async fn describe_user_import_job(
        &self,
        request: DescribeUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError>;
    async fn start_user_import_job(
        &self,
        request: StartUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError>;
    async fn stop_user_import_job(
        &self,
        request: StopUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError>;
    async fn list_user_import_jobs(
        &self,
        request: ListUserImportJobsRequest,
    ) -> Result<ListUserImportJobsResponse, ApiError>;
    async fn get_csv_header(
        &self,
        request: GetCsvHeaderRequest,
    ) -> Result<GetCsvHeaderResponse, ApiError>;

    // UI customization
    async fn get_ui_customization(
        &self,
        request: GetUiCustomizationRequest,
    ) -> Result<UiCustomizationResponse, ApiError>;
    async fn set_ui_customization(
        &self,
        request: SetUiCustomizationRequest,
    ) -> Result<UiCustomizationResponse, ApiError>;
}
