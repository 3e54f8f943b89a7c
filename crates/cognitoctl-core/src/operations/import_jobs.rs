//! Bulk user import operations

use clap::Args;
use serde::{Deserialize, Serialize};

use super::operation;
use crate::descriptor::{CommandDescriptor, OutputShape, Verb};
use crate::model::UserImportJob;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserImportJobRequest {
    /// A name for the import job
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_name: Option<String>,

    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Role ARN allowing Cognito to write to CloudWatch Logs
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_watch_logs_role_arn: Option<String>,
}

/// Request shape shared by describe/start/stop import job
macro_rules! job_request {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
        #[serde(rename_all = "PascalCase")]
        pub struct $name {
            /// The user pool ID
            #[arg(long)]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub user_pool_id: Option<String>,

            /// The import job ID
            #[arg(long)]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub job_id: Option<String>,
        }
    };
}

job_request!(DescribeUserImportJobRequest, "Request for `DescribeUserImportJob`");
job_request!(StartUserImportJobRequest, "Request for `StartUserImportJob`");
job_request!(StopUserImportJobRequest, "Request for `StopUserImportJob`");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserImportJobsRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,

    /// Maximum number of jobs to return
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous call
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Args)]
#[serde(rename_all = "PascalCase")]
pub struct GetCsvHeaderRequest {
    /// The user pool ID
    #[arg(long)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
}

/// Response of create/describe/start/stop import job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserImportJobResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_import_job: Option<UserImportJob>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListUserImportJobsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_import_jobs: Option<Vec<UserImportJob>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination_token: Option<String>,
}

/// Response of `GetCSVHeader`, emitted whole
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCsvHeaderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<String>,
    #[serde(default, rename = "CSVHeader", skip_serializing_if = "Option::is_none")]
    pub csv_header: Option<Vec<String>>,
}

operation!(CreateUserImportJobRequest => UserImportJobResponse, create_user_import_job, CommandDescriptor {
    operation: "CreateUserImportJob",
    verb: Verb::New,
    noun: "user-import-job",
    pipeline_param: "JobName",
    resource_param: "JobName",
    output: OutputShape::Field("UserImportJob"),
    pass_thru: None,
});

operation!(DescribeUserImportJobRequest => UserImportJobResponse, describe_user_import_job, CommandDescriptor {
    operation: "DescribeUserImportJob",
    verb: Verb::Get,
    noun: "user-import-job",
    pipeline_param: "JobId",
    resource_param: "JobId",
    output: OutputShape::Field("UserImportJob"),
    pass_thru: None,
});

operation!(StartUserImportJobRequest => UserImportJobResponse, start_user_import_job, CommandDescriptor {
    operation: "StartUserImportJob",
    verb: Verb::Start,
    noun: "user-import-job",
    pipeline_param: "JobId",
    resource_param: "JobId",
    output: OutputShape::Field("UserImportJob"),
    pass_thru: None,
});

operation!(StopUserImportJobRequest => UserImportJobResponse, stop_user_import_job, CommandDescriptor {
    operation: "StopUserImportJob",
    verb: Verb::Stop,
    noun: "user-import-job",
    pipeline_param: "JobId",
    resource_param: "JobId",
    output: OutputShape::Field("UserImportJob"),
    pass_thru: None,
});

operation!(ListUserImportJobsRequest => ListUserImportJobsResponse, list_user_import_jobs, CommandDescriptor {
    operation: "ListUserImportJobs",
    verb: Verb::Get,
    noun: "user-import-job-list",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Field("UserImportJobs"),
    pass_thru: None,
});

operation!(GetCsvHeaderRequest => GetCsvHeaderResponse, get_csv_header, CommandDescriptor {
    operation: "GetCSVHeader",
    verb: Verb::Get,
    noun: "csv-header",
    pipeline_param: "UserPoolId",
    resource_param: "UserPoolId",
    output: OutputShape::Whole,
    pass_thru: None,
});
