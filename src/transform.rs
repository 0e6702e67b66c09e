// This file is part of the tf-plan-modifiers project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
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

use async_trait::async_trait;
use tf_provider::Value;

use crate::planmodifier::{PlanModifier, Request, Response};

/// Plan modifier rewriting the configured string.
///
/// The planned value is derived from the configuration only, ignoring plan
/// and state. Null or unknown configurations are left alone.
#[derive(Debug, Clone)]
pub struct ChangeString<F> {
    f: F,
    description: &'static str,
}

impl<F> ChangeString<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    pub fn new(f: F, description: &'static str) -> Self {
        Self { f, description }
    }
}

#[async_trait]
impl<F> PlanModifier<String> for ChangeString<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn description(&self) -> String {
        self.description.to_owned()
    }

    fn markdown_description(&self) -> String {
        self.description.to_owned()
    }

    async fn plan_modify(&self, request: &Request<String>, response: &mut Response<String>) {
        if let Value::Value(config) = &request.config_value {
            response.plan_value = Value::Value((self.f)(config.as_str()));
        }
    }
}

pub type CaseFold = ChangeString<fn(&str) -> String>;

pub fn to_upper() -> CaseFold {
    ChangeString::new(str::to_uppercase as fn(&str) -> String, "Force to upper case")
}

pub fn to_lower() -> CaseFold {
    ChangeString::new(str::to_lowercase as fn(&str) -> String, "Force to lower case")
}
