// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use log::warn;
use metropol_core::{utils::Redact, Context};

use crate::constants::*;

/// Config carries all the configuration for the metropol client.
///
/// Config is a plain value: every `with_*` method consumes it and returns the
/// updated copy, nothing is shared with clients built from an earlier value.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// `public_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`METROPOL_PUBLIC_KEY`]
    pub public_key: Option<String>,
    /// `private_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`METROPOL_PRIVATE_KEY`]
    pub private_key: Option<String>,
    /// Scheme and host of the api, `https://api.metropol.co.ke` by default.
    ///
    /// Overridden by env value [`METROPOL_BASE_URL`] only when left at the default.
    pub base_url: String,
    /// Port of the api, `443` by default.
    ///
    /// Always confirm the port with the bureau before connecting.
    pub port: u16,
    /// Optional api version inserted as `/<version>` before the resource path.
    ///
    /// The value is used verbatim, it is not url encoded.
    pub version: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_key: None,
            private_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            version: None,
        }
    }
}

impl Config {
    /// Create a new Config pointing at the production endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set public_key
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Set private_key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Load config from env.
    ///
    /// Values already set on the config take precedence over env values.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(METROPOL_PUBLIC_KEY) {
            self.public_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(METROPOL_PRIVATE_KEY) {
            self.private_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(METROPOL_VERSION) {
            self.version.get_or_insert(v);
        }
        if self.base_url == DEFAULT_BASE_URL {
            if let Some(v) = ctx.env_var(METROPOL_BASE_URL) {
                self.base_url = v;
            }
        }
        if self.port == DEFAULT_PORT {
            if let Some(v) = ctx.env_var(METROPOL_PORT) {
                match v.trim().parse() {
                    Ok(port) => self.port = port,
                    Err(err) => warn!("ignore invalid {METROPOL_PORT} {v:?}: {err}"),
                }
            }
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("public_key", &Redact::from(&self.public_key))
            .field("private_key", &Redact::from(&self.private_key))
            .field("base_url", &self.base_url)
            .field("port", &self.port)
            .field("version", &self.version)
            .finish()
    }
}
