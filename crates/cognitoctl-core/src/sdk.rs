//! [`CognitoApi`] over the AWS SDK client
//!
//! Each method copies the present request fields onto the SDK's fluent
//! builder with `set_*`, sends exactly one request and converts the output
//! into the wire model. No retries or pagination beyond what the SDK does.

use std::collections::BTreeMap;
use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::types as sdk;
use aws_types::SdkConfig;
use tracing::trace;

use crate::api::CognitoApi;
use crate::error::ApiError;
use crate::model::{
    Attribute, Device, Group, UiCustomization, User, UserImportJob, UserPool, UserPoolDescription,
    attributes, mfa_options, opt, timestamp,
};
use crate::operations::*;

/// Cognito client backed by `aws_sdk_cognitoidentityprovider`
#[derive(Debug, Clone)]
pub struct SdkCognitoApi {
    client: Client,
}

impl SdkCognitoApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from loaded AWS config, optionally overriding the endpoint.
    pub fn from_sdk_config(config: &SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_cognitoidentityprovider::config::Builder::from(config);
        if let Some(url) = endpoint_url {
            builder = builder.endpoint_url(url);
        }
        Self::new(Client::from_conf(builder.build()))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn metadata(map: Option<BTreeMap<String, String>>) -> Option<HashMap<String, String>> {
    map.map(|m| m.into_iter().collect())
}

fn groups(list: Option<Vec<sdk::GroupType>>) -> Option<Vec<Group>> {
    list.map(|l| l.into_iter().map(Group::from).collect())
}

fn users(list: Option<Vec<sdk::UserType>>) -> Option<Vec<User>> {
    list.map(|l| l.into_iter().map(User::from).collect())
}

fn import_job(job: Option<sdk::UserImportJobType>) -> UserImportJobResponse {
    UserImportJobResponse {
        user_import_job: job.map(UserImportJob::from),
    }
}

fn sdk_attributes(
    list: Option<Vec<Attribute>>,
) -> Result<Option<Vec<sdk::AttributeType>>, ApiError> {
    list.map(|l| {
        l.into_iter()
            .map(sdk::AttributeType::try_from)
            .collect::<Result<Vec<_>, _>>()
    })
    .transpose()
    .map_err(|e| ApiError::Construction {
        source: Box::new(e),
    })
}

#[async_trait]
impl CognitoApi for SdkCognitoApi {
    async fn get_group(&self, request: GetGroupRequest) -> Result<GroupResponse, ApiError> {
        trace!(?request, "GetGroup");
        let output = self
            .client
            .get_group()
            .set_group_name(request.group_name)
            .set_user_pool_id(request.user_pool_id)
            .send()
            .await?;
        Ok(GroupResponse {
            group: output.group.map(Group::from),
        })
    }

    async fn create_group(&self, request: CreateGroupRequest) -> Result<GroupResponse, ApiError> {
        trace!(?request, "CreateGroup");
        let output = self
            .client
            .create_group()
            .set_group_name(request.group_name)
            .set_user_pool_id(request.user_pool_id)
            .set_description(request.description)
            .set_role_arn(request.role_arn)
            .set_precedence(request.precedence)
            .send()
            .await?;
        Ok(GroupResponse {
            group: output.group.map(Group::from),
        })
    }

    async fn update_group(&self, request: UpdateGroupRequest) -> Result<GroupResponse, ApiError> {
        trace!(?request, "UpdateGroup");
        let output = self
            .client
            .update_group()
            .set_group_name(request.group_name)
            .set_user_pool_id(request.user_pool_id)
            .set_description(request.description)
            .set_role_arn(request.role_arn)
            .set_precedence(request.precedence)
            .send()
            .await?;
        Ok(GroupResponse {
            group: output.group.map(Group::from),
        })
    }

    async fn delete_group(&self, request: DeleteGroupRequest) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "DeleteGroup");
        self.client
            .delete_group()
            .set_group_name(request.group_name)
            .set_user_pool_id(request.user_pool_id)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn list_groups(
        &self,
        request: ListGroupsRequest,
    ) -> Result<GroupListResponse, ApiError> {
        trace!(?request, "ListGroups");
        let output = self
            .client
            .list_groups()
            .set_user_pool_id(request.user_pool_id)
            .set_limit(request.limit)
            .set_next_token(request.next_token)
            .send()
            .await?;
        Ok(GroupListResponse {
            groups: groups(output.groups),
            next_token: output.next_token,
        })
    }

    async fn list_users_in_group(
        &self,
        request: ListUsersInGroupRequest,
    ) -> Result<ListUsersInGroupResponse, ApiError> {
        trace!(?request, "ListUsersInGroup");
        let output = self
            .client
            .list_users_in_group()
            .set_user_pool_id(request.user_pool_id)
            .set_group_name(request.group_name)
            .set_limit(request.limit)
            .set_next_token(request.next_token)
            .send()
            .await?;
        Ok(ListUsersInGroupResponse {
            users: users(output.users),
            next_token: output.next_token,
        })
    }

    async fn admin_add_user_to_group(
        &self,
        request: AdminAddUserToGroupRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminAddUserToGroup");
        self.client
            .admin_add_user_to_group()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .set_group_name(request.group_name)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_remove_user_from_group(
        &self,
        request: AdminRemoveUserFromGroupRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminRemoveUserFromGroup");
        self.client
            .admin_remove_user_from_group()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .set_group_name(request.group_name)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_list_groups_for_user(
        &self,
        request: AdminListGroupsForUserRequest,
    ) -> Result<GroupListResponse, ApiError> {
        trace!(?request, "AdminListGroupsForUser");
        let output = self
            .client
            .admin_list_groups_for_user()
            .set_username(request.username)
            .set_user_pool_id(request.user_pool_id)
            .set_limit(request.limit)
            .set_next_token(request.next_token)
            .send()
            .await?;
        Ok(GroupListResponse {
            groups: groups(output.groups),
            next_token: output.next_token,
        })
    }

    async fn admin_get_device(
        &self,
        request: AdminGetDeviceRequest,
    ) -> Result<AdminGetDeviceResponse, ApiError> {
        trace!(?request, "AdminGetDevice");
        let output = self
            .client
            .admin_get_device()
            .set_device_key(request.device_key)
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .send()
            .await?;
        Ok(AdminGetDeviceResponse {
            device: opt::<sdk::DeviceType>(output.device).map(Device::from),
        })
    }

    async fn admin_list_devices(
        &self,
        request: AdminListDevicesRequest,
    ) -> Result<AdminListDevicesResponse, ApiError> {
        trace!(?request, "AdminListDevices");
        let output = self
            .client
            .admin_list_devices()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .set_limit(request.limit)
            .set_pagination_token(request.pagination_token)
            .send()
            .await?;
        Ok(AdminListDevicesResponse {
            devices: output
                .devices
                .map(|l| l.into_iter().map(Device::from).collect()),
            pagination_token: output.pagination_token,
        })
    }

    async fn admin_forget_device(
        &self,
        request: AdminForgetDeviceRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminForgetDevice");
        self.client
            .admin_forget_device()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .set_device_key(request.device_key)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_get_user(
        &self,
        request: AdminGetUserRequest,
    ) -> Result<AdminGetUserResponse, ApiError> {
        trace!(?request, "AdminGetUser");
        let output = self
            .client
            .admin_get_user()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .send()
            .await?;
        Ok(AdminGetUserResponse {
            username: opt::<String>(output.username),
            user_attributes: attributes(output.user_attributes),
            user_create_date: timestamp(output.user_create_date),
            user_last_modified_date: timestamp(output.user_last_modified_date),
            enabled: opt::<bool>(output.enabled),
            user_status: opt::<sdk::UserStatusType>(output.user_status)
                .map(|s| s.as_str().to_owned()),
            mfa_options: mfa_options(output.mfa_options),
            preferred_mfa_setting: output.preferred_mfa_setting,
            user_mfa_setting_list: output.user_mfa_setting_list,
        })
    }

    async fn list_users(&self, request: ListUsersRequest) -> Result<ListUsersResponse, ApiError> {
        trace!(?request, "ListUsers");
        let output = self
            .client
            .list_users()
            .set_user_pool_id(request.user_pool_id)
            .set_attributes_to_get(request.attributes_to_get)
            .set_limit(request.limit)
            .set_pagination_token(request.pagination_token)
            .set_filter(request.filter)
            .send()
            .await?;
        Ok(ListUsersResponse {
            users: users(output.users),
            pagination_token: output.pagination_token,
        })
    }

    async fn admin_disable_user(
        &self,
        request: AdminDisableUserRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminDisableUser");
        self.client
            .admin_disable_user()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_enable_user(
        &self,
        request: AdminEnableUserRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminEnableUser");
        self.client
            .admin_enable_user()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_delete_user(
        &self,
        request: AdminDeleteUserRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminDeleteUser");
        self.client
            .admin_delete_user()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_reset_user_password(
        &self,
        request: AdminResetUserPasswordRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminResetUserPassword");
        self.client
            .admin_reset_user_password()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .set_client_metadata(metadata(request.client_metadata))
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn admin_update_user_attributes(
        &self,
        request: AdminUpdateUserAttributesRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AdminUpdateUserAttributes");
        self.client
            .admin_update_user_attributes()
            .set_user_pool_id(request.user_pool_id)
            .set_username(request.username)
            .set_user_attributes(sdk_attributes(request.user_attributes)?)
            .set_client_metadata(metadata(request.client_metadata))
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn describe_user_pool(
        &self,
        request: DescribeUserPoolRequest,
    ) -> Result<DescribeUserPoolResponse, ApiError> {
        trace!(?request, "DescribeUserPool");
        let output = self
            .client
            .describe_user_pool()
            .set_user_pool_id(request.user_pool_id)
            .send()
            .await?;
        Ok(DescribeUserPoolResponse {
            user_pool: output.user_pool.map(UserPool::from),
        })
    }

    async fn list_user_pools(
        &self,
        request: ListUserPoolsRequest,
    ) -> Result<ListUserPoolsResponse, ApiError> {
        trace!(?request, "ListUserPools");
        let output = self
            .client
            .list_user_pools()
            .set_next_token(request.next_token)
            .set_max_results(request.max_results)
            .send()
            .await?;
        Ok(ListUserPoolsResponse {
            user_pools: output
                .user_pools
                .map(|l| l.into_iter().map(UserPoolDescription::from).collect()),
            next_token: output.next_token,
        })
    }

    async fn add_custom_attributes(
        &self,
        request: AddCustomAttributesRequest,
    ) -> Result<EmptyResponse, ApiError> {
        trace!(?request, "AddCustomAttributes");
        self.client
            .add_custom_attributes()
            .set_user_pool_id(request.user_pool_id)
            .set_custom_attributes(request.custom_attributes.map(|l| {
                l.into_iter()
                    .map(sdk::SchemaAttributeType::from)
                    .collect::<Vec<_>>()
            }))
            .send()
            .await?;
        Ok(EmptyResponse {})
    }

    async fn get_signing_certificate(
        &self,
        request: GetSigningCertificateRequest,
    ) -> Result<GetSigningCertificateResponse, ApiError> {
        trace!(?request, "GetSigningCertificate");
        let output = self
            .client
            .get_signing_certificate()
            .set_user_pool_id(request.user_pool_id)
            .send()
            .await?;
        Ok(GetSigningCertificateResponse {
            certificate: output.certificate,
        })
    }

    async fn create_user_import_job(
        &self,
        request: CreateUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError> {
        trace!(?request, "CreateUserImportJob");
        let output = self
            .client
            .create_user_import_job()
            .set_job_name(request.job_name)
            .set_user_pool_id(request.user_pool_id)
            .set_cloud_watch_logs_role_arn(request.cloud_watch_logs_role_arn)
            .send()
            .await?;
        Ok(import_job(output.user_import_job))
    }

    async fn describe_user_import_job(
        &self,
        request: DescribeUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError> {
        trace!(?request, "DescribeUserImportJob");
        let output = self
            .client
            .describe_user_import_job()
            .set_user_pool_id(request.user_pool_id)
            .set_job_id(request.job_id)
            .send()
            .await?;
        Ok(import_job(output.user_import_job))
    }

    async fn start_user_import_job(
        &self,
        request: StartUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError> {
        trace!(?request, "StartUserImportJob");
        let output = self
            .client
            .start_user_import_job()
            .set_user_pool_id(request.user_pool_id)
            .set_job_id(request.job_id)
            .send()
            .await?;
        Ok(import_job(output.user_import_job))
    }

    async fn stop_user_import_job(
        &self,
        request: StopUserImportJobRequest,
    ) -> Result<UserImportJobResponse, ApiError> {
        trace!(?request, "StopUserImportJob");
        let output = self
            .client
            .stop_user_import_job()
            .set_user_pool_id(request.user_pool_id)
            .set_job_id(request.job_id)
            .send()
            .await?;
        Ok(import_job(output.user_import_job))
    }

    async fn list_user_import_jobs(
        &self,
        request: ListUserImportJobsRequest,
    ) -> Result<ListUserImportJobsResponse, ApiError> {
        trace!(?request, "ListUserImportJobs");
        let output = self
            .client
            .list_user_import_jobs()
            .set_user_pool_id(request.user_pool_id)
            .set_max_results(request.max_results)
            .set_pagination_token(request.pagination_token)
            .send()
            .await?;
        Ok(ListUserImportJobsResponse {
            user_import_jobs: output
                .user_import_jobs
                .map(|l| l.into_iter().map(UserImportJob::from).collect()),
            pagination_token: output.pagination_token,
        })
    }

    async fn get_csv_header(
        &self,
        request: GetCsvHeaderRequest,
    ) -> Result<GetCsvHeaderResponse, ApiError> {
        trace!(?request, "GetCSVHeader");
        let output = self
            .client
            .get_csv_header()
            .set_user_pool_id(request.user_pool_id)
            .send()
            .await?;
        Ok(GetCsvHeaderResponse {
            user_pool_id: output.user_pool_id,
            csv_header: output.csv_header,
        })
    }

    async fn get_ui_customization(
        &self,
        request: GetUiCustomizationRequest,
    ) -> Result<UiCustomizationResponse, ApiError> {
        trace!(?request, "GetUICustomization");
        let output = self
            .client
            .get_ui_customization()
            .set_user_pool_id(request.user_pool_id)
            .set_client_id(request.client_id)
            .send()
            .await?;
        Ok(UiCustomizationResponse {
            ui_customization: opt::<sdk::UiCustomizationType>(output.ui_customization)
                .map(UiCustomization::from),
        })
    }

    async fn set_ui_customization(
        &self,
        request: SetUiCustomizationRequest,
    ) -> Result<UiCustomizationResponse, ApiError> {
        trace!(?request, "SetUICustomization");
        let image_file = request
            .image_file
            .map(|blob| blob.decode())
            .transpose()
            .map_err(|e| ApiError::Construction {
                source: Box::new(e),
            })?
            .map(aws_smithy_types::Blob::new);

        let output = self
            .client
            .set_ui_customization()
            .set_user_pool_id(request.user_pool_id)
            .set_client_id(request.client_id)
            .set_css(request.css)
            .set_image_file(image_file)
            .send()
            .await?;
        Ok(UiCustomizationResponse {
            ui_customization: opt::<sdk::UiCustomizationType>(output.ui_customization)
                .map(UiCustomization::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Blob, SchemaAttribute, StringAttributeConstraints};
    use aws_sdk_cognitoidentityprovider::config::Region;
    use aws_sdk_cognitoidentityprovider::operation::add_custom_attributes::AddCustomAttributesOutput;
    use aws_sdk_cognitoidentityprovider::operation::admin_forget_device::AdminForgetDeviceOutput;
    use aws_sdk_cognitoidentityprovider::operation::admin_list_devices::AdminListDevicesOutput;
    use aws_sdk_cognitoidentityprovider::operation::admin_reset_user_password::AdminResetUserPasswordOutput;
    use aws_sdk_cognitoidentityprovider::operation::admin_update_user_attributes::AdminUpdateUserAttributesOutput;
    use aws_sdk_cognitoidentityprovider::operation::create_group::CreateGroupOutput;
    use aws_sdk_cognitoidentityprovider::operation::create_user_import_job::CreateUserImportJobOutput;
    use aws_sdk_cognitoidentityprovider::operation::get_group::GetGroupOutput;
    use aws_sdk_cognitoidentityprovider::operation::list_user_pools::ListUserPoolsOutput;
    use aws_sdk_cognitoidentityprovider::operation::list_users::ListUsersOutput;
    use aws_sdk_cognitoidentityprovider::operation::set_ui_customization::SetUiCustomizationOutput;
    use aws_sdk_cognitoidentityprovider::operation::stop_user_import_job::StopUserImportJobOutput;
    use aws_sdk_cognitoidentityprovider::{Client, Config};
    use aws_smithy_mocks_experimental::{MockResponseInterceptor, Rule, mock};
    use aws_smithy_runtime_api::client::http::{
        HttpClient, HttpConnector, HttpConnectorFuture, HttpConnectorSettings, SharedHttpConnector,
    };
    use aws_smithy_runtime_api::client::orchestrator::{HttpRequest, HttpResponse};
    use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;
    use pretty_assertions::assert_eq;

    /// Answers every request with an empty 200 without touching the network.
    /// Mock rules replace the response, or its body for `then_http_response`.
    #[derive(Debug, Clone)]
    struct OfflineHttpClient;

    impl HttpConnector for OfflineHttpClient {
        fn call(&self, _request: HttpRequest) -> HttpConnectorFuture {
            HttpConnectorFuture::ready(Ok(HttpResponse::new(
                StatusCode::try_from(200).unwrap(),
                SdkBody::from("{}"),
            )))
        }
    }

    impl HttpClient for OfflineHttpClient {
        fn http_connector(
            &self,
            _settings: &HttpConnectorSettings,
            _components: &RuntimeComponents,
        ) -> SharedHttpConnector {
            SharedHttpConnector::new(self.clone())
        }
    }

    fn api_with(rule: &Rule) -> SdkCognitoApi {
        let client = Client::from_conf(
            Config::builder()
                .with_test_defaults()
                .region(Region::new("us-east-1"))
                .http_client(OfflineHttpClient)
                .interceptor(MockResponseInterceptor::new().with_rule(rule))
                .build(),
        );
        SdkCognitoApi::new(client)
    }

    fn pool() -> Option<String> {
        Some("us-east-1_ABC123".to_string())
    }

    #[tokio::test]
    async fn test_get_group_sends_supplied_fields() {
        let rule = mock!(Client::get_group)
            .match_requests(|req| {
                req.group_name() == Some("Admins") && req.user_pool_id() == Some("us-east-1_ABC123")
            })
            .then_output(|| {
                GetGroupOutput::builder()
                    .group(
                        sdk::GroupType::builder()
                            .group_name("Admins")
                            .description("d")
                            .build(),
                    )
                    .build()
            });
        let api = api_with(&rule);

        let response = api
            .get_group(GetGroupRequest {
                group_name: Some("Admins".to_string()),
                user_pool_id: Some("us-east-1_ABC123".to_string()),
            })
            .await
            .unwrap();

        let group = response.group.unwrap();
        assert_eq!(group.group_name.as_deref(), Some("Admins"));
        assert_eq!(group.description.as_deref(), Some("d"));
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_absent_fields_are_not_sent() {
        let rule = mock!(Client::admin_forget_device)
            .match_requests(|req| {
                req.device_key() == Some("dk-1") && req.username().is_none()
            })
            .then_output(|| AdminForgetDeviceOutput::builder().build());
        let api = api_with(&rule);

        api.admin_forget_device(AdminForgetDeviceRequest {
            device_key: Some("dk-1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_group_sends_every_field() {
        let rule = mock!(Client::create_group)
            .match_requests(|req| {
                req.group_name() == Some("Editors")
                    && req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.description() == Some("Content editors")
                    && req.role_arn() == Some("arn:aws:iam::123456789012:role/editors")
                    && req.precedence() == Some(10)
            })
            .then_output(|| CreateGroupOutput::builder().build());
        let api = api_with(&rule);

        api.create_group(CreateGroupRequest {
            group_name: Some("Editors".to_string()),
            user_pool_id: pool(),
            description: Some("Content editors".to_string()),
            role_arn: Some("arn:aws:iam::123456789012:role/editors".to_string()),
            precedence: Some(10),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_admin_list_devices_sends_every_field() {
        let rule = mock!(Client::admin_list_devices)
            .match_requests(|req| {
                req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.username() == Some("alice")
                    && req.limit() == Some(5)
                    && req.pagination_token() == Some("page-2")
            })
            .then_output(|| AdminListDevicesOutput::builder().build());
        let api = api_with(&rule);

        api.admin_list_devices(AdminListDevicesRequest {
            user_pool_id: pool(),
            username: Some("alice".to_string()),
            limit: Some(5),
            pagination_token: Some("page-2".to_string()),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_users_sends_every_field() {
        let rule = mock!(Client::list_users)
            .match_requests(|req| {
                req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.attributes_to_get() == ["email", "name"]
                    && req.limit() == Some(20)
                    && req.pagination_token() == Some("token-1")
                    && req.filter() == Some("email ^= \"alice\"")
            })
            .then_output(|| {
                ListUsersOutput::builder()
                    .users(sdk::UserType::builder().username("alice").build())
                    .build()
            });
        let api = api_with(&rule);

        let response = api
            .list_users(ListUsersRequest {
                user_pool_id: pool(),
                attributes_to_get: Some(vec!["email".to_string(), "name".to_string()]),
                limit: Some(20),
                pagination_token: Some("token-1".to_string()),
                filter: Some("email ^= \"alice\"".to_string()),
            })
            .await
            .unwrap();

        let users = response.users.unwrap();
        assert_eq!(users[0].username.as_deref(), Some("alice"));
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_admin_update_user_attributes_sends_attributes_and_metadata() {
        let rule = mock!(Client::admin_update_user_attributes)
            .match_requests(|req| {
                let attrs = req.user_attributes();
                req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.username() == Some("alice")
                    && attrs.len() == 2
                    && attrs[0].name() == "email"
                    && attrs[0].value() == Some("alice@example.com")
                    && attrs[1].name() == "custom:tier"
                    && attrs[1].value().is_none()
                    && req
                        .client_metadata()
                        .and_then(|m| m.get("source"))
                        .map(String::as_str)
                        == Some("cli")
            })
            .then_output(|| AdminUpdateUserAttributesOutput::builder().build());
        let api = api_with(&rule);

        api.admin_update_user_attributes(AdminUpdateUserAttributesRequest {
            user_pool_id: pool(),
            username: Some("alice".to_string()),
            user_attributes: Some(vec![
                Attribute::new("email", "alice@example.com"),
                Attribute {
                    name: "custom:tier".to_string(),
                    value: None,
                },
            ]),
            client_metadata: Some(BTreeMap::from([("source".to_string(), "cli".to_string())])),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_admin_reset_user_password_sends_client_metadata() {
        let rule = mock!(Client::admin_reset_user_password)
            .match_requests(|req| {
                let metadata = req.client_metadata();
                req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.username() == Some("bob")
                    && metadata.map(|m| m.len()) == Some(2)
                    && metadata.and_then(|m| m.get("ticket")).map(String::as_str)
                        == Some("OPS-42")
            })
            .then_output(|| AdminResetUserPasswordOutput::builder().build());
        let api = api_with(&rule);

        api.admin_reset_user_password(AdminResetUserPasswordRequest {
            user_pool_id: pool(),
            username: Some("bob".to_string()),
            client_metadata: Some(BTreeMap::from([
                ("ticket".to_string(), "OPS-42".to_string()),
                ("actor".to_string(), "helpdesk".to_string()),
            ])),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_add_custom_attributes_sends_schema() {
        let rule = mock!(Client::add_custom_attributes)
            .match_requests(|req| {
                let attrs = req.custom_attributes();
                attrs.len() == 1
                    && req.user_pool_id() == Some("us-east-1_ABC123")
                    && attrs[0].name() == Some("tier")
                    && attrs[0].attribute_data_type() == Some(&sdk::AttributeDataType::String)
                    && attrs[0].developer_only_attribute() == Some(false)
                    && attrs[0].mutable() == Some(true)
                    && attrs[0].required() == Some(false)
                    && attrs[0]
                        .string_attribute_constraints()
                        .and_then(|c| c.max_length())
                        == Some("16")
                    && attrs[0].number_attribute_constraints().is_none()
            })
            .then_output(|| AddCustomAttributesOutput::builder().build());
        let api = api_with(&rule);

        api.add_custom_attributes(AddCustomAttributesRequest {
            user_pool_id: pool(),
            custom_attributes: Some(vec![SchemaAttribute {
                name: Some("tier".to_string()),
                attribute_data_type: Some("String".to_string()),
                developer_only_attribute: Some(false),
                mutable: Some(true),
                required: Some(false),
                number_attribute_constraints: None,
                string_attribute_constraints: Some(StringAttributeConstraints {
                    min_length: Some("1".to_string()),
                    max_length: Some("16".to_string()),
                }),
            }]),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_list_user_pools_sends_every_field() {
        let rule = mock!(Client::list_user_pools)
            .match_requests(|req| {
                req.max_results() == Some(60) && req.next_token() == Some("next-1")
            })
            .then_output(|| ListUserPoolsOutput::builder().build());
        let api = api_with(&rule);

        api.list_user_pools(ListUserPoolsRequest {
            next_token: Some("next-1".to_string()),
            max_results: Some(60),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_user_import_job_sends_every_field() {
        let rule = mock!(Client::create_user_import_job)
            .match_requests(|req| {
                req.job_name() == Some("nightly")
                    && req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.cloud_watch_logs_role_arn()
                        == Some("arn:aws:iam::123456789012:role/import-logs")
            })
            .then_output(|| {
                CreateUserImportJobOutput::builder()
                    .user_import_job(
                        sdk::UserImportJobType::builder()
                            .job_name("nightly")
                            .status(sdk::UserImportJobStatusType::Created)
                            .build(),
                    )
                    .build()
            });
        let api = api_with(&rule);

        let response = api
            .create_user_import_job(CreateUserImportJobRequest {
                job_name: Some("nightly".to_string()),
                user_pool_id: pool(),
                cloud_watch_logs_role_arn: Some(
                    "arn:aws:iam::123456789012:role/import-logs".to_string(),
                ),
            })
            .await
            .unwrap();

        let job = response.user_import_job.unwrap();
        assert_eq!(job.status.as_deref(), Some("Created"));
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_set_ui_customization_sends_decoded_image() {
        let rule = mock!(Client::set_ui_customization)
            .match_requests(|req| {
                req.user_pool_id() == Some("us-east-1_ABC123")
                    && req.client_id() == Some("app-client")
                    && req.css() == Some(".banner-customizable { padding: 5px; }")
                    && req.image_file().map(|blob| blob.as_ref()) == Some(&b"\x89PNG-logo"[..])
            })
            .then_output(|| SetUiCustomizationOutput::builder().build());
        let api = api_with(&rule);

        api.set_ui_customization(SetUiCustomizationRequest {
            user_pool_id: pool(),
            client_id: Some("app-client".to_string()),
            css: Some(".banner-customizable { padding: 5px; }".to_string()),
            image_file: Some(Blob::from_bytes(b"\x89PNG-logo")),
        })
        .await
        .unwrap();
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_import_job_status_is_rendered_as_text() {
        let rule = mock!(Client::stop_user_import_job).then_output(|| {
            StopUserImportJobOutput::builder()
                .user_import_job(
                    sdk::UserImportJobType::builder()
                        .job_id("import-1")
                        .status(sdk::UserImportJobStatusType::Stopping)
                        .build(),
                )
                .build()
        });
        let api = api_with(&rule);

        let response = api
            .stop_user_import_job(StopUserImportJobRequest {
                job_id: Some("import-1".to_string()),
                user_pool_id: Some("us-east-1_ABC123".to_string()),
            })
            .await
            .unwrap();

        let job = response.user_import_job.unwrap();
        assert_eq!(job.job_id.as_deref(), Some("import-1"));
        assert_eq!(job.status.as_deref(), Some("Stopping"));
    }

    #[tokio::test]
    async fn test_service_error_keeps_code_and_status() {
        let rule = mock!(Client::get_group).then_http_response(|| {
            HttpResponse::new(
                StatusCode::try_from(400).unwrap(),
                SdkBody::from(
                    r#"{"__type": "ResourceNotFoundException", "message": "Group not found."}"#,
                ),
            )
        });
        let api = api_with(&rule);

        let err = api
            .get_group(GetGroupRequest {
                group_name: Some("Missing".to_string()),
                user_pool_id: Some("us-east-1_ABC123".to_string()),
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        match err {
            ApiError::Service {
                code,
                message,
                status,
                ..
            } => {
                assert_eq!(code.as_deref(), Some("ResourceNotFoundException"));
                assert_eq!(message.as_deref(), Some("Group not found."));
                assert_eq!(status, 400);
            }
            other => panic!("expected service error, got {other:?}"),
        }
        assert_eq!(rule.num_calls(), 1);
    }

    #[tokio::test]
    async fn test_invalid_blob_is_a_construction_error() {
        let rule = mock!(Client::set_ui_customization).then_http_response(|| {
            HttpResponse::new(StatusCode::try_from(500).unwrap(), SdkBody::empty())
        });
        let api = api_with(&rule);

        let request: SetUiCustomizationRequest =
            serde_json::from_value(serde_json::json!({"ImageFile": "not base64!"})).unwrap();
        let err = api.set_ui_customization(request).await.unwrap_err();

        assert!(matches!(err, ApiError::Construction { .. }));
        assert_eq!(rule.num_calls(), 0);
    }
}
