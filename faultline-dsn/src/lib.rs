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

use snafu::Snafu;

mod dsn;
mod into_dsn;

pub use dsn::{Dsn, Scheme};
pub use into_dsn::{DsnValue, IntoDsn};

/// Every parse failure carries the complete raw value so the caller
/// can report which dsn was rejected.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "The option \"dsn\" with value \"{url}\" is invalid, {source}"
    ))]
    UrlParse {
        source: url::ParseError,
        url: String,
    },
    #[snafu(display(
        "The option \"dsn\" with value \"{url}\" is invalid, scheme \"{scheme}\" is not supported"
    ))]
    Scheme { scheme: String, url: String },
    #[snafu(display(
        "The option \"dsn\" with value \"{url}\" is invalid, public key is missing"
    ))]
    PublicKey { url: String },
    #[snafu(display(
        "The option \"dsn\" with value \"{url}\" is invalid, secret key is empty"
    ))]
    SecretKey { url: String },
    #[snafu(display(
        "The option \"dsn\" with value \"{url}\" is invalid, host is missing"
    ))]
    Host { url: String },
    #[snafu(display(
        "The option \"dsn\" with value \"{url}\" is invalid, project id \"{value}\" is not a number"
    ))]
    ProjectId { value: String, url: String },
}
pub type Result<T, E = Error> = std::result::Result<T, E>;
