//! Device operations

use clap::Args;
use serde::{Deserialize, Serialize};

use super::{EmptyResponse, operation};
use crate::descriptor::{CommandDescriptor, OutputShape, Verb};
use crate::model::Device;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminGetDeviceRequest {
    /// The device key
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_key: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name of the device owner
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminListDevicesRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name of the device owner
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Maximum number of devices to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct AdminForgetDeviceRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// The user name of the device owner
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// The device key to forget
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminGetDeviceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminListDevicesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

operation!(AdminGetDeviceRequest => AdminGetDeviceResponse, admin_get_device, CommandDescriptor {
    operation: "AdminGetDevice",
    verb: Verb::Get,
    noun: "admin-device",
    pipeline_param: "DeviceKey",
    resource_param: "DeviceKey",
    output: OutputShape::Field("Device"),
    pass_thru: None,
});

operation!(AdminListDevicesRequest => AdminListDevicesResponse, admin_list_devices, CommandDescriptor {
    operation: "AdminListDevices",
    verb: Verb::Get,
    noun: "admin-device-list",
    pipeline_param: "Username",
    resource_param: "Username",
    output: OutputShape::Field("Devices"),
    pass_thru: None,
});

operation!(AdminForgetDeviceRequest => EmptyResponse, admin_forget_device, CommandDescriptor {
    operation: "AdminForgetDevice",
    verb: Verb::Remove,
    noun: "admin-device",
    pipeline_param: "DeviceKey",
    resource_param: "DeviceKey",
    output: OutputShape::Nothing,
    pass_thru: Some("DeviceKey"),
});
