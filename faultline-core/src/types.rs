// Copyright 2024-2025 Tree xie.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use strum::EnumString;

/// Callback invoked before a value leaves the client, it may replace
/// the value or drop it by returning `None`. The client stores these
/// hooks but never runs them while building options.
pub type BeforeCallback<T> = Arc<dyn Fn(T) -> Option<T> + Send + Sync>;

/// Severity of an event or breadcrumb.
#[derive(
    PartialEq,
    Eq,
    Debug,
    Default,
    Clone,
    Copy,
    EnumString,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl Level {
    /// Protocol name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

fn default_event_level() -> Level {
    Level::Error
}

/// A single report sent to the monitoring service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Severity of the event.
    #[serde(default = "default_event_level")]
    pub level: Level,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    /// Name of the logger that captured the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
    /// Human readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Release of the application that captured the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    /// Environment the event was captured in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    /// Name of the server the event was captured on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    /// Key value tags attached to the event.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
    /// Arbitrary structured payload attached to the event.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            level: Level::Error,
            timestamp: Utc::now(),
            logger: None,
            message: None,
            release: None,
            environment: None,
            server_name: None,
            tags: HashMap::new(),
            extra: HashMap::new(),
        }
    }
}

/// A diagnostic record of something that happened before an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// When the breadcrumb was recorded.
    pub timestamp: DateTime<Utc>,
    /// Severity of the breadcrumb.
    #[serde(default)]
    pub level: Level,
    /// Dotted category, such as `http` or `navigation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Human readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Arbitrary structured payload attached to the breadcrumb.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub data: HashMap<String, serde_json::Value>,
}

impl Default for Breadcrumb {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            level: Level::Info,
            category: None,
            message: None,
            data: HashMap::new(),
        }
    }
}
