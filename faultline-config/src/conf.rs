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

use super::{Error, Result};
use derive_more::Debug;
use faultline_core::{BeforeCallback, Breadcrumb, Event};
use faultline_dsn::DsnValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Charset detection order as it appears in configuration, either a
/// single charset or a list of charsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetectOrder {
    Single(String),
    List(Vec<String>),
}

impl From<DetectOrder> for Vec<String> {
    fn from(value: DetectOrder) -> Self {
        match value {
            DetectOrder::Single(value) => vec![value],
            DetectOrder::List(values) => values,
        }
    }
}

/// Initial configuration for the client options. Every field is
/// optional and falls back to its default when absent, unknown keys
/// are rejected so misspelled options surface immediately.
#[derive(Debug, Default, Deserialize, Clone, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsConf {
    /// Data source name of the project, sentinel values disable
    /// reporting.
    pub dsn: Option<DsnValue>,
    /// How many delivery attempts are made for an event.
    pub send_attempts: Option<u32>,
    /// Fraction of events to report, between 0.0 and 1.0.
    pub sample_rate: Option<f32>,
    /// Whether a stacktrace is attached to captured messages.
    pub attach_stacktrace: Option<bool>,
    /// Lines of source context around each stack frame.
    pub context_lines: Option<u32>,
    /// Whether request body compression is enabled.
    pub enable_compression: Option<bool>,
    /// Environment events are reported under.
    pub environment: Option<String>,
    /// Bitmask of reported error types.
    pub error_types: Option<i32>,
    /// Exception types dropped instead of reported, subtypes included.
    pub excluded_exceptions: Option<Vec<String>>,
    /// Paths excluded from the project, directory entries gain a
    /// trailing separator.
    #[serde(rename = "excluded_app_paths")]
    pub excluded_project_paths: Option<Vec<String>>,
    /// Name of the logger reported with every event.
    pub logger: Option<String>,
    /// Maximum number of breadcrumbs kept.
    pub max_breadcrumbs: Option<usize>,
    /// Charset detection order, a single charset or a list.
    pub mb_detect_order: Option<DetectOrder>,
    /// Prefixes stripped from file paths when resolving in app frames.
    pub prefixes: Option<Vec<String>>,
    /// Root of the project source tree.
    pub project_root: Option<String>,
    /// Release of the application.
    pub release: Option<String>,
    /// Whether every object is serialized into event payloads.
    #[serde(rename = "serialize_all_object")]
    pub serialize_all_objects: Option<bool>,
    /// Name reported as the server.
    pub server_name: Option<String>,
    /// Tags attached to every event.
    pub tags: Option<HashMap<String, String>>,
    /// Hook invoked before an event is sent, only settable from code.
    #[serde(skip)]
    #[debug(skip)]
    pub before_send: Option<BeforeCallback<Event>>,
    /// Hook invoked before a breadcrumb is recorded, only settable
    /// from code.
    #[serde(skip)]
    #[debug(skip)]
    pub before_breadcrumb: Option<BeforeCallback<Breadcrumb>>,
}

impl OptionsConf {
    /// Parses the options from toml.
    pub fn from_toml(data: &str) -> Result<Self> {
        let conf: OptionsConf =
            toml::from_str(data).map_err(|e| Error::De { source: e })?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_toml() {
        let conf = OptionsConf::from_toml(
            r###"
dsn = "https://public@example.com/1"
send_attempts = 5
sample_rate = 0.5
excluded_app_paths = ["/var/app/vendor"]
serialize_all_object = true
mb_detect_order = "UTF-8"
tags = { region = "eu" }
"###,
        )
        .unwrap();
        assert_eq!(
            Some(DsnValue::Value("https://public@example.com/1".to_string())),
            conf.dsn
        );
        assert_eq!(Some(5), conf.send_attempts);
        assert_eq!(Some(0.5), conf.sample_rate);
        assert_eq!(
            Some(vec!["/var/app/vendor".to_string()]),
            conf.excluded_project_paths
        );
        assert_eq!(Some(true), conf.serialize_all_objects);
        assert_eq!(
            Some(DetectOrder::Single("UTF-8".to_string())),
            conf.mb_detect_order
        );
        assert_eq!(
            Some("eu"),
            conf.tags
                .unwrap_or_default()
                .get("region")
                .map(|value| value.as_str())
        );
    }

    #[test]
    fn test_from_toml_dsn_flag() {
        let conf = OptionsConf::from_toml("dsn = false").unwrap();
        assert_eq!(Some(DsnValue::Flag(false)), conf.dsn);

        let conf = OptionsConf::from_toml(
            r###"
mb_detect_order = ["UTF-8", "ISO-8859-1"]
"###,
        )
        .unwrap();
        assert_eq!(
            Some(DetectOrder::List(vec![
                "UTF-8".to_string(),
                "ISO-8859-1".to_string(),
            ])),
            conf.mb_detect_order
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = OptionsConf::from_toml("such_option_does_not_exist = 1");
        assert_eq!(true, result.is_err());
        assert_eq!(
            true,
            result
                .unwrap_err()
                .to_string()
                .contains("unknown field `such_option_does_not_exist`")
        );

        // the modern plural spelling is not a recognized key either,
        // only the historical one is
        let result =
            OptionsConf::from_toml("serialize_all_objects = true");
        assert_eq!(true, result.is_err());
    }

    #[test]
    fn test_detect_order_into_list() {
        let order: Vec<String> =
            DetectOrder::Single("UTF-8".to_string()).into();
        assert_eq!(vec!["UTF-8".to_string()], order);
        let order: Vec<String> = DetectOrder::List(vec![]).into();
        assert_eq!(true, order.is_empty());
    }
}
