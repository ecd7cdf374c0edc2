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

static LOG_CATEGORY: &str = "config";

mod conf;
mod options;

pub use conf::{DetectOrder, OptionsConf};
pub use faultline_core::{
    BeforeCallback, Breadcrumb, ErrorTypeInfo, Event, Level,
};
pub use faultline_dsn::{Dsn, DsnValue, IntoDsn, Scheme};
pub use options::Options;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display(
        "The option \"{name}\" with value \"{value}\" is invalid"
    ))]
    Invalid { name: String, value: String },
    #[snafu(display("{source}"))]
    Dsn { source: faultline_dsn::Error },
    #[snafu(display("Toml de error {source}"))]
    De { source: toml::de::Error },
}
pub type Result<T, E = Error> = std::result::Result<T, E>;
