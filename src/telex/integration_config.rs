//! Integration self-description served to the Telex platform.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::AppConfig;
use crate::core::models::WEBHOOK_USERNAME;
use crate::verse::SourceCategory;

pub const CREATED_AT: &str = "Feb 21, 2025";
pub const APP_NAME: &str = "Daily Bible Verse";
pub const APP_DESCRIPTION: &str = "Daily Bible verse delivery to your Telex channel";
pub const BACKGROUND_COLOR: &str = "#6fd644";

pub const INTERVAL_OPTIONS: [&str; 9] = [
    "0 6 * * *",
    "0 8 * * *",
    "0 10 * * *",
    "0 12 * * *",
    "0 18 * * *",
    "0 21 * * *",
    "* * * * *",
    "5 * * * *",
    "2 * * * *",
];

pub const TRANSLATION_OPTIONS: [&str; 5] = ["NIV", "ESV", "KJV", "NLT", "NASB"];

const KEY_FEATURES: [&str; 4] = [
    "Daily Bible verses delivered at your chosen time.",
    "Customizable verse sources (books, themes, translations).",
    "Optional reflection prompts with each verse.",
    "Easy configuration via simple commands.",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    pub data: IntegrationData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationData {
    pub date: IntegrationDates,
    pub descriptions: Descriptions,
    pub integration_category: String,
    pub integration_type: String,
    pub is_active: bool,
    pub output: Vec<OutputChannel>,
    pub key_features: Vec<String>,
    pub permissions: Permissions,
    pub settings: Vec<Setting>,
    pub tick_url: String,
    pub target_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationDates {
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptions {
    pub app_description: String,
    pub app_logo: String,
    pub app_name: String,
    pub app_url: String,
    pub background_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputChannel {
    pub label: String,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub monitoring_user: MonitoringUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoringUser {
    pub always_online: bool,
    pub display_name: String,
}

/// A dropdown shown in the integration's settings panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub required: bool,
    pub default: String,
    pub options: Vec<String>,
}

impl Setting {
    fn dropdown<I, S>(label: &str, default: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_string(),
            kind: "dropdown".to_string(),
            required: true,
            default: default.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Integration config stamped with today's date.
#[must_use]
pub fn integration_config(config: &AppConfig) -> IntegrationConfig {
    build_integration_config(config, Utc::now().date_naive())
}

#[must_use]
pub fn build_integration_config(config: &AppConfig, updated_on: NaiveDate) -> IntegrationConfig {
    let settings = vec![
        Setting::dropdown("interval", "0 8 * * *", INTERVAL_OPTIONS),
        Setting::dropdown(
            "Source",
            SourceCategory::Random.as_str(),
            SourceCategory::ALL.map(SourceCategory::as_str),
        ),
        Setting::dropdown("Translation", "KJV", TRANSLATION_OPTIONS),
    ];

    IntegrationConfig {
        data: IntegrationData {
            date: IntegrationDates {
                created_at: CREATED_AT.to_string(),
                updated_at: updated_on.format("%Y-%m-%d").to_string(),
            },
            descriptions: Descriptions {
                app_description: APP_DESCRIPTION.to_string(),
                app_logo: config.logo_url.clone(),
                app_name: APP_NAME.to_string(),
                app_url: config.base_url.clone(),
                background_color: BACKGROUND_COLOR.to_string(),
            },
            integration_category: "Communication & Collaboration".to_string(),
            integration_type: "interval".to_string(),
            is_active: true,
            output: vec![OutputChannel {
                label: "output_channel_1".to_string(),
                value: true,
            }],
            key_features: KEY_FEATURES.iter().map(ToString::to_string).collect(),
            permissions: Permissions {
                monitoring_user: MonitoringUser {
                    always_online: true,
                    display_name: WEBHOOK_USERNAME.to_string(),
                },
            },
            settings,
            tick_url: config.tick_url(),
            target_url: config.base_url.clone(),
        },
    }
}
