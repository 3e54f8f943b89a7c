//! Conversions between the wire model and the SDK's generated types

use aws_sdk_cognitoidentityprovider::error::BuildError;
use aws_sdk_cognitoidentityprovider::types as sdk;
use aws_smithy_types::DateTime as SmithyDateTime;
use chrono::{DateTime, Utc};

use super::{
    Attribute, Device, Group, MfaOption, NumberAttributeConstraints, SchemaAttribute,
    StringAttributeConstraints, UiCustomization, User, UserImportJob, UserPool,
    UserPoolDescription,
};

/// Normalize an SDK member that may or may not be modelled as optional.
pub(crate) fn opt<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

pub(crate) fn timestamp(value: impl Into<Option<SmithyDateTime>>) -> Option<DateTime<Utc>> {
    value
        .into()
        .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
}

pub(crate) fn attributes(
    value: impl Into<Option<Vec<sdk::AttributeType>>>,
) -> Option<Vec<Attribute>> {
    value
        .into()
        .map(|list| list.into_iter().map(Attribute::from).collect())
}

impl From<sdk::AttributeType> for Attribute {
    fn from(a: sdk::AttributeType) -> Self {
        Self {
            name: opt::<String>(a.name).unwrap_or_default(),
            value: a.value,
        }
    }
}

impl TryFrom<Attribute> for sdk::AttributeType {
    type Error = BuildError;

    fn try_from(a: Attribute) -> Result<Self, Self::Error> {
        sdk::AttributeType::builder()
            .name(a.name)
            .set_value(a.value)
            .build()
    }
}

impl From<sdk::GroupType> for Group {
    fn from(g: sdk::GroupType) -> Self {
        Self {
            group_name: g.group_name,
            user_pool_id: g.user_pool_id,
            description: g.description,
            role_arn: g.role_arn,
            precedence: opt::<i32>(g.precedence),
            last_modified_date: timestamp(g.last_modified_date),
            creation_date: timestamp(g.creation_date),
        }
    }
}

impl From<sdk::DeviceType> for Device {
    fn from(d: sdk::DeviceType) -> Self {
        Self {
            device_key: d.device_key,
            device_attributes: attributes(d.device_attributes),
            device_create_date: timestamp(d.device_create_date),
            device_last_modified_date: timestamp(d.device_last_modified_date),
            device_last_authenticated_date: timestamp(d.device_last_authenticated_date),
        }
    }
}

impl From<sdk::MfaOptionType> for MfaOption {
    fn from(m: sdk::MfaOptionType) -> Self {
        Self {
            delivery_medium: opt::<sdk::DeliveryMediumType>(m.delivery_medium)
                .map(|d| d.as_str().to_owned()),
            attribute_name: m.attribute_name,
        }
    }
}

pub(crate) fn mfa_options(
    value: impl Into<Option<Vec<sdk::MfaOptionType>>>,
) -> Option<Vec<MfaOption>> {
    value
        .into()
        .map(|list| list.into_iter().map(MfaOption::from).collect())
}

impl From<sdk::UserType> for User {
    fn from(u: sdk::UserType) -> Self {
        Self {
            username: u.username,
            attributes: attributes(u.attributes),
            user_create_date: timestamp(u.user_create_date),
            user_last_modified_date: timestamp(u.user_last_modified_date),
            enabled: opt::<bool>(u.enabled),
            user_status: opt::<sdk::UserStatusType>(u.user_status).map(|s| s.as_str().to_owned()),
            mfa_options: mfa_options(u.mfa_options),
        }
    }
}

impl From<sdk::NumberAttributeConstraintsType> for NumberAttributeConstraints {
    fn from(c: sdk::NumberAttributeConstraintsType) -> Self {
        Self {
            min_value: c.min_value,
            max_value: c.max_value,
        }
    }
}

impl From<NumberAttributeConstraints> for sdk::NumberAttributeConstraintsType {
    fn from(c: NumberAttributeConstraints) -> Self {
        sdk::NumberAttributeConstraintsType::builder()
            .set_min_value(c.min_value)
            .set_max_value(c.max_value)
            .build()
    }
}

impl From<sdk::StringAttributeConstraintsType> for StringAttributeConstraints {
    fn from(c: sdk::StringAttributeConstraintsType) -> Self {
        Self {
            min_length: c.min_length,
            max_length: c.max_length,
        }
    }
}

impl From<StringAttributeConstraints> for sdk::StringAttributeConstraintsType {
    fn from(c: StringAttributeConstraints) -> Self {
        sdk::StringAttributeConstraintsType::builder()
            .set_min_length(c.min_length)
            .set_max_length(c.max_length)
            .build()
    }
}

impl From<sdk::SchemaAttributeType> for SchemaAttribute {
    fn from(s: sdk::SchemaAttributeType) -> Self {
        Self {
            name: s.name,
            attribute_data_type: opt::<sdk::AttributeDataType>(s.attribute_data_type)
                .map(|t| t.as_str().to_owned()),
            developer_only_attribute: opt::<bool>(s.developer_only_attribute),
            mutable: opt::<bool>(s.mutable),
            required: opt::<bool>(s.required),
            number_attribute_constraints: s
                .number_attribute_constraints
                .map(NumberAttributeConstraints::from),
            string_attribute_constraints: s
                .string_attribute_constraints
                .map(StringAttributeConstraints::from),
        }
    }
}

impl From<SchemaAttribute> for sdk::SchemaAttributeType {
    fn from(s: SchemaAttribute) -> Self {
        sdk::SchemaAttributeType::builder()
            .set_name(s.name)
            .set_attribute_data_type(
                s.attribute_data_type
                    .as_deref()
                    .map(sdk::AttributeDataType::from),
            )
            .set_developer_only_attribute(s.developer_only_attribute)
            .set_mutable(s.mutable)
            .set_required(s.required)
            .set_number_attribute_constraints(s.number_attribute_constraints.map(Into::into))
            .set_string_attribute_constraints(s.string_attribute_constraints.map(Into::into))
            .build()
    }
}

fn enum_names<E>(value: Option<Vec<E>>, name: fn(&E) -> &str) -> Option<Vec<String>> {
    value.map(|list| list.iter().map(|e| name(e).to_owned()).collect())
}

impl From<sdk::UserPoolType> for UserPool {
    fn from(p: sdk::UserPoolType) -> Self {
        Self {
            id: p.id,
            name: p.name,
            arn: p.arn,
            creation_date: timestamp(p.creation_date),
            last_modified_date: timestamp(p.last_modified_date),
            estimated_number_of_users: opt::<i32>(p.estimated_number_of_users),
            mfa_configuration: opt::<sdk::UserPoolMfaType>(p.mfa_configuration)
                .map(|m| m.as_str().to_owned()),
            deletion_protection: opt::<sdk::DeletionProtectionType>(p.deletion_protection)
                .map(|d| d.as_str().to_owned()),
            domain: p.domain,
            custom_domain: p.custom_domain,
            schema_attributes: opt::<Vec<sdk::SchemaAttributeType>>(p.schema_attributes)
                .map(|list| list.into_iter().map(SchemaAttribute::from).collect()),
            auto_verified_attributes: enum_names(
                opt::<Vec<sdk::VerifiedAttributeType>>(p.auto_verified_attributes),
                sdk::VerifiedAttributeType::as_str,
            ),
            alias_attributes: enum_names(
                opt::<Vec<sdk::AliasAttributeType>>(p.alias_attributes),
                sdk::AliasAttributeType::as_str,
            ),
            username_attributes: enum_names(
                opt::<Vec<sdk::UsernameAttributeType>>(p.username_attributes),
                sdk::UsernameAttributeType::as_str,
            ),
            user_pool_tags: p.user_pool_tags.map(|tags| tags.into_iter().collect()),
        }
    }
}

impl From<sdk::UserPoolDescriptionType> for UserPoolDescription {
    fn from(p: sdk::UserPoolDescriptionType) -> Self {
        Self {
            id: p.id,
            name: p.name,
            last_modified_date: timestamp(p.last_modified_date),
            creation_date: timestamp(p.creation_date),
        }
    }
}

impl From<sdk::UserImportJobType> for UserImportJob {
    fn from(j: sdk::UserImportJobType) -> Self {
        Self {
            job_name: j.job_name,
            job_id: j.job_id,
            user_pool_id: j.user_pool_id,
            pre_signed_url: j.pre_signed_url,
            creation_date: timestamp(j.creation_date),
            start_date: timestamp(j.start_date),
            completion_date: timestamp(j.completion_date),
            status: opt::<sdk::UserImportJobStatusType>(j.status).map(|s| s.as_str().to_owned()),
            cloud_watch_logs_role_arn: j.cloud_watch_logs_role_arn,
            imported_users: opt::<i64>(j.imported_users),
            skipped_users: opt::<i64>(j.skipped_users),
            failed_users: opt::<i64>(j.failed_users),
            completion_message: j.completion_message,
        }
    }
}

impl From<sdk::UiCustomizationType> for UiCustomization {
    fn from(u: sdk::UiCustomizationType) -> Self {
        Self {
            user_pool_id: u.user_pool_id,
            client_id: u.client_id,
            image_url: u.image_url,
            css: u.css,
            css_version: u.css_version,
            last_modified_date: timestamp(u.last_modified_date),
            creation_date: timestamp(u.creation_date),
        }
    }
}
