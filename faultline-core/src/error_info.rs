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

/// Type identity of an error value. Exclusion rules match against the
/// concrete type name and every ancestor name, so listing a base type
/// excludes the whole hierarchy.
pub trait ErrorTypeInfo {
    /// Name of the concrete error type.
    fn error_type(&self) -> &str;
    /// Names of the ancestor types the error also counts as, nearest
    /// first.
    fn parent_types(&self) -> &[&str] {
        &[]
    }
}

impl ErrorTypeInfo for std::io::Error {
    fn error_type(&self) -> &str {
        "std::io::Error"
    }
    fn parent_types(&self) -> &[&str] {
        &["std::error::Error"]
    }
}
