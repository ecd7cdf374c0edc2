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

use super::{Dsn, Result};
use serde::{Deserialize, Serialize};

/// Sentinel values that mean reporting is turned off rather than
/// misconfigured.
fn is_disabled_value(value: &str) -> bool {
    value.is_empty() || matches!(value, "null" | "false" | "empty")
}

/// Converts a supported configuration value into a dsn. `Ok(None)`
/// means reporting is disabled, which is distinct from a parse
/// failure.
pub trait IntoDsn {
    fn into_dsn(self) -> Result<Option<Dsn>>;
}

impl IntoDsn for &str {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        if is_disabled_value(self) {
            Ok(None)
        } else {
            self.try_into().map(Some)
        }
    }
}

impl IntoDsn for String {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        self.as_str().into_dsn()
    }
}

impl IntoDsn for &String {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        self.as_str().into_dsn()
    }
}

impl IntoDsn for bool {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        if self {
            // literal true has no url to offer, let the parser reject it
            "true".into_dsn()
        } else {
            Ok(None)
        }
    }
}

impl<T: IntoDsn> IntoDsn for Option<T> {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        match self {
            Some(value) => value.into_dsn(),
            None => Ok(None),
        }
    }
}

impl IntoDsn for Dsn {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        Ok(Some(self))
    }
}

impl IntoDsn for &Dsn {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        Ok(Some(self.clone()))
    }
}

/// Raw dsn as it appears in configuration, either a connection string
/// or a boolean toggle where false disables reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DsnValue {
    Value(String),
    Flag(bool),
}

impl IntoDsn for DsnValue {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        match self {
            DsnValue::Value(value) => value.into_dsn(),
            DsnValue::Flag(value) => value.into_dsn(),
        }
    }
}

impl IntoDsn for &DsnValue {
    fn into_dsn(self) -> Result<Option<Dsn>> {
        self.clone().into_dsn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disabled_values() {
        assert_eq!(true, "".into_dsn().unwrap().is_none());
        assert_eq!(true, "null".into_dsn().unwrap().is_none());
        assert_eq!(true, "false".into_dsn().unwrap().is_none());
        assert_eq!(true, "empty".into_dsn().unwrap().is_none());
        assert_eq!(true, false.into_dsn().unwrap().is_none());
        let absent: Option<&str> = None;
        assert_eq!(true, absent.into_dsn().unwrap().is_none());
    }

    #[test]
    fn test_into_dsn() {
        let dsn = "https://public@example.com/1".into_dsn().unwrap().unwrap();
        assert_eq!("public", dsn.public_key());
        assert_eq!(1, dsn.project_id());

        // boolean true is not a usable dsn
        assert_eq!(true, true.into_dsn().is_err());
        assert_eq!(true, DsnValue::Flag(true).into_dsn().is_err());

        assert_eq!(
            None,
            DsnValue::Value("null".to_string()).into_dsn().unwrap()
        );
        assert_eq!(None, DsnValue::Flag(false).into_dsn().unwrap());
        let dsn = DsnValue::Value("https://public@example.com/1".to_string())
            .into_dsn()
            .unwrap();
        assert_eq!(true, dsn.is_some());
    }
}
