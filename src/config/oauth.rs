// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0
use secrecy::{ExposeSecret, SecretString};

/// OAuth client registration of the hub.
///
/// Stored for the authenticator integration only. The values are never
/// inspected and the secret never shows up in `Debug` output.
#[derive(Clone, Debug)]
pub struct OAuthCredentials {
    /// Client id.
    pub client_id: String,
    /// Client secret.
    pub client_secret: SecretString,
    /// Callback url registered with the identity provider.
    pub callback_url: String,
}

impl PartialEq for OAuthCredentials {
    fn eq(&self, other: &Self) -> bool {
        self.client_id == other.client_id
            && self.callback_url == other.callback_url
            && self.client_secret.expose_secret() == other.client_secret.expose_secret()
    }
}
