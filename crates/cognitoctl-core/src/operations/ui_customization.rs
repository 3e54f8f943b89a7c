//! Hosted UI customization operations

use clap::Args;
use serde::{Deserialize, Serialize};

use super::operation;
use crate::descriptor::{CommandDescriptor, OutputShape, Verb};
use crate::model::{Blob, UiCustomization};
use crate::parse;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct GetUiCustomizationRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// App client ID; omit for the pool-wide customization
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct SetUiCustomizationRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// App client ID; omit to customize every client in the pool
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// CSS to apply to the hosted UI
    #[arg(long)]
    #[serde(default, rename = "CSS", skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    /// Path to the logo image; sent base64 encoded
    #[arg(long, value_parser = parse::blob_file)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_file: Option<Blob>,
}

/// Response of `GetUICustomization` and `SetUICustomization`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiCustomizationResponse {
    #[serde(
        default,
        rename = "UICustomization",
        skip_serializing_if = "Option::is_none"
    )]
    pub ui_customization: Option<UiCustomization>,
}

operation!(GetUiCustomizationRequest => UiCustomizationResponse, get_ui_customization, CommandDescriptor {
    operation: "GetUICustomization",
    verb: Verb::Get,
    noun: "ui-customization",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("UICustomization"),
    pass_thru: None,
});

operation!(SetUiCustomizationRequest => UiCustomizationResponse, set_ui_customization, CommandDescriptor {
    operation: "SetUICustomization",
    verb: Verb::Set,
    noun: "ui-customization",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("UICustomization"),
    pass_thru: None,
});
