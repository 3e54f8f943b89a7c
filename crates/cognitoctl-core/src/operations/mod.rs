//! Request and response types for every wrapped operation
//!
//! Requests derive `clap::Args`, so each field is both a command-line flag
//! (kebab case) and a wire member (PascalCase). Every field is optional;
//! nothing is validated here, the service decides what is required.

use serde::{Deserialize, Serialize};

use crate::descriptor::{CommandDescriptor, Operation};

pub use devices::*;
pub use groups::*;
pub use import_jobs::*;
pub use ui_customization::*;
pub use user_pools::*;
pub use users::*;

/// Response of operations with no output members
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// Bind a request type to its descriptor and the `CognitoApi` method serving it.
macro_rules! operation {
    ($request:ty => $response:ty, $method:ident, $descriptor:expr) => {
        #[async_trait::async_trait]
        impl $crate::descriptor::Operation for $request {
            type Response = $response;

            const DESCRIPTOR: $crate::descriptor::CommandDescriptor = $descriptor;

            async fn dispatch(
                &self,
                api: &dyn $crate::api::CognitoApi,
            ) -> Result<Self::Response, $crate::error::ApiError> {
                api.$method(self.clone()).await
            }
        }
    };
}

pub(crate) use operation;

pub mod devices;
pub mod groups;
pub mod import_jobs;
pub mod ui_customization;
pub mod user_pools;
pub mod users;

/// Every operation descriptor, in command-name order
pub fn descriptors() -> Vec<CommandDescriptor> {
    let mut all = vec![
        GetGroupRequest::DESCRIPTOR,
        CreateGroupRequest::DESCRIPTOR,
        UpdateGroupRequest::DESCRIPTOR,
        DeleteGroupRequest::DESCRIPTOR,
        ListGroupsRequest::DESCRIPTOR,
        ListUsersInGroupRequest::DESCRIPTOR,
        AdminAddUserToGroupRequest::DESCRIPTOR,
        AdminRemoveUserFromGroupRequest::DESCRIPTOR,
        AdminListGroupsForUserRequest::DESCRIPTOR,
        AdminGetDeviceRequest::DESCRIPTOR,
        AdminListDevicesRequest::DESCRIPTOR,
        AdminForgetDeviceRequest::DESCRIPTOR,
        AdminGetUserRequest::DESCRIPTOR,
        ListUsersRequest::DESCRIPTOR,
        AdminDisableUserRequest::DESCRIPTOR,
        AdminEnableUserRequest::DESCRIPTOR,
        AdminDeleteUserRequest::DESCRIPTOR,
        AdminResetUserPasswordRequest::DESCRIPTOR,
        AdminUpdateUserAttributesRequest::DESCRIPTOR,
        DescribeUserPoolRequest::DESCRIPTOR,
        ListUserPoolsRequest::DESCRIPTOR,
        AddCustomAttributesRequest::DESCRIPTOR,
        GetSigningCertificateRequest::DESCRIPTOR,
        CreateUserImportJobRequest::DESCRIPTOR,
        DescribeUserImportJobRequest::DESCRIPTOR,
        StartUserImportJobRequest::DESCRIPTOR,
        StopUserImportJobRequest::DESCRIPTOR,
        ListUserImportJobsRequest::DESCRIPTOR,
        GetCsvHeaderRequest::DESCRIPTOR,
        GetUiCustomizationRequest::DESCRIPTOR,
        SetUiCustomizationRequest::DESCRIPTOR,
    ];
    all.sort_by_key(|d| d.command_name());
    all
}

/// Look up a descriptor by command name or operation alias
pub fn find_descriptor(name: &str) -> Option<CommandDescriptor> {
    descriptors().into_iter().find(|d| {
        d.command_name() == name || d.operation_alias() == name || d.operation == name
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::descriptor::OutputShape;

    #[test]
    fn test_registry_covers_every_operation_once() {
        let all = descriptors();
        assert_eq!(all.len(), 31);

        let operations: HashSet<_> = all.iter().map(|d| d.operation).collect();
        assert_eq!(operations.len(), all.len());

        let names: HashSet<_> = all.iter().map(|d| d.command_name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_pass_thru_only_without_natural_payload() {
        for d in descriptors() {
            if d.pass_thru.is_some() {
                assert_eq!(d.output, OutputShape::Nothing, "{}", d.operation);
                assert!(d.requires_confirmation(), "{}", d.operation);
            }
            if d.output == OutputShape::Nothing {
                assert!(d.pass_thru.is_some(), "{}", d.operation);
            }
        }
    }

    #[test]
    fn test_read_operations_use_get_verb() {
        for d in descriptors() {
            let reads = ["Get", "List", "Describe", "AdminGet", "AdminList"]
                .iter()
                .any(|p| d.operation.starts_with(p));
            assert_eq!(!d.requires_confirmation(), reads, "{}", d.operation);
        }
    }

    #[test]
    fn test_find_descriptor_by_any_name() {
        let by_command = find_descriptor("get-admin-device").unwrap();
        let by_alias = find_descriptor("admin-get-device").unwrap();
        let by_operation = find_descriptor("AdminGetDevice").unwrap();
        assert_eq!(by_command, by_alias);
        assert_eq!(by_alias, by_operation);
        assert!(find_descriptor("get-widget").is_none());
    }
}
