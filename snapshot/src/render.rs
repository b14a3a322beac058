//! Rendering of the generated `globals-for-browser.js` module.
//!
//! Tests running in a browser cannot read environment variables, so the
//! values are baked into a module that the bundler picks up. Loading the
//! module fills `jasmine.getEnv().reactorIntegrationTestGlobals` once; a slot
//! that is already populated is left alone.

use crate::requirements::ReactorEnvironment;
use std::path::{Path, PathBuf};

const LICENSE_HEADER: &str = "\
/*
Copyright 2019 Adobe. All rights reserved.
This file is licensed to you under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License. You may obtain a copy
of the License at http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software distributed under
the License is distributed on an \"AS IS\" BASIS, WITHOUT WARRANTIES OR REPRESENTATIONS
OF ANY KIND, either express or implied. See the License for the specific language
governing permissions and limitations under the License.
*/
";

/// Name of the generator recorded in the provenance comment.
pub const GENERATOR_NAME: &str = "write-reactor-environment";

/// Rendered module text and the path it is destined for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    path: PathBuf,
    contents: String,
}

impl GeneratedArtifact {
    pub fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Render the module for `env`, stamped with `timestamp`.
///
/// Pure: the same inputs always produce the same bytes.
pub fn render(timestamp: &str, env: &ReactorEnvironment) -> String {
    format!(
        "{LICENSE_HEADER}
/*
This file was auto-generated by {GENERATOR_NAME}
at {timestamp}.

Tests intended to run in a browser need this file to be generated before
the 'parcel build' of 'integration-tests.html', because in-browser tests can't
get configuration information directly from environment variables.

Loading this module populates jasmine.getEnv().reactorIntegrationTestGlobals
unless it is already set, and default-exports whatever that slot then holds.
*/
jasmine.getEnv().reactorIntegrationTestGlobals = jasmine.getEnv()
  .reactorIntegrationTestGlobals || {{
  /* eslint-disable */
  ACCESS_TOKEN: '{access_token}',
  /* eslint-enable */
  COMPANY_ID: '{company_id}',
  REACTOR_URL: '{reactor_url}',
}};
const globals = jasmine.getEnv().reactorIntegrationTestGlobals;
export {{ globals as default }};
",
        access_token = js_single_quoted(&env.access_token),
        company_id = js_single_quoted(&env.company_id),
        reactor_url = js_single_quoted(&env.reactor_url),
    )
}

/// Escape `value` for use between single quotes in JavaScript source, so the
/// evaluated string is exactly `value`.
fn js_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
