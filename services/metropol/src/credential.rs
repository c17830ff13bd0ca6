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

use metropol_core::utils::Redact;

use crate::Config;

/// Credential for the metropol api.
///
/// The public key identifies the client and is sent with every request. The
/// private key only ever enters the request hash.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Public api key.
    pub public_key: String,
    /// Private api key.
    pub private_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Take the keys out of a config.
    ///
    /// Keys missing in the config become empty strings: requests are still
    /// signed and the server decides whether to accept them.
    pub fn from_config(config: &Config) -> Self {
        Self {
            public_key: config.public_key.clone().unwrap_or_default(),
            private_key: config.private_key.clone().unwrap_or_default(),
        }
    }

    /// Check whether both keys are present.
    pub fn is_empty(&self) -> bool {
        self.public_key.is_empty() || self.private_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("public_key", &Redact::from(&self.public_key))
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}
