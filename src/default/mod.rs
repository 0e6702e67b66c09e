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
use tf_provider::{Diagnostics, Value};

use crate::planmodifier::{merge_diagnostics, PlanModifier, Request, Response};
use crate::value::AttributeType;

mod env;

pub use env::{EnvLookup, FromEnv, ProcessEnv};

/// Value produced by a [`DefaultFunc`]
#[derive(Debug, Default)]
pub struct DefaultFuncResponse<T> {
    /// Errors or warnings raised while computing the default.
    /// Any error leaves the planned value untouched.
    pub diagnostics: Diagnostics,
    /// Value to plan when the attribute is not configured
    pub value: T,
}

/// Source of a default value
pub trait DefaultFunc<T>: Send + Sync {
    fn default_value(&self, request: &Request<T>, response: &mut DefaultFuncResponse<T>);
}

/// Fixed default value
#[derive(Debug, Clone)]
pub struct Constant<T>(pub T);

impl<T: AttributeType> DefaultFunc<T> for Constant<T> {
    fn default_value(&self, _request: &Request<T>, response: &mut DefaultFuncResponse<T>) {
        response.value = self.0.clone();
    }
}

/// Default value computed by a user callback
#[derive(Debug, Clone)]
pub struct Callback<F>(pub F);

impl<T, F> DefaultFunc<T> for Callback<F>
where
    F: Fn(&Request<T>, &mut DefaultFuncResponse<T>) + Send + Sync,
{
    fn default_value(&self, request: &Request<T>, response: &mut DefaultFuncResponse<T>) {
        (self.0)(request, response)
    }
}

/// Plan modifier filling an unconfigured attribute with a default value.
///
/// The default is applied only if all of the following hold:
///   - the plan and state values differ,
///   - the configuration is null or unknown,
///   - no earlier modifier already planned a known value.
#[derive(Debug, Clone)]
pub struct SetDefault<F> {
    f: F,
    description: &'static str,
}

impl<F> SetDefault<F> {
    pub fn new(f: F, description: &'static str) -> Self {
        Self { f, description }
    }
}

#[async_trait]
impl<T, F> PlanModifier<T> for SetDefault<F>
where
    T: AttributeType,
    F: DefaultFunc<T>,
{
    fn description(&self) -> String {
        self.description.to_owned()
    }

    fn markdown_description(&self) -> String {
        self.description.to_owned()
    }

    async fn plan_modify(&self, request: &Request<T>, response: &mut Response<T>) {
        if request.plan_value == request.state_value {
            tracing::debug!(path = %request.path, "plan matches state, default skipped");
            return;
        }

        // Explicit configuration is kept, unknown (interpolated) configuration is not
        if !request.config_value.is_null() && !request.config_value.is_unknown() {
            tracing::debug!(path = %request.path, "attribute configured, default skipped");
            return;
        }

        // A previous modifier of the chain already planned a value
        if !request.plan_value.is_null() && !request.plan_value.is_unknown() {
            tracing::debug!(path = %request.path, "value already planned, default skipped");
            return;
        }

        let mut func_response = DefaultFuncResponse::default();
        self.f.default_value(request, &mut func_response);

        let failed = !func_response.diagnostics.errors.is_empty();
        merge_diagnostics(&mut response.diagnostics, func_response.diagnostics);
        if failed {
            tracing::debug!(path = %request.path, "default value not available");
            return;
        }

        tracing::debug!(
            path = %request.path,
            value = ?func_response.value,
            "planning default value"
        );
        response.plan_value = Value::Value(func_response.value);
    }
}
