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

use std::marker::PhantomData;

use async_trait::async_trait;
use tf_provider::{Diagnostics, Value};

use crate::path::Path;
use crate::planmodifier::{merge_diagnostics, PlanModifier, Request, Response};
use crate::value::AttributeType;

#[derive(Debug, Default)]
pub struct RequiresReplaceIfFuncResponse {
    pub diagnostics: Diagnostics,
    /// Setting it to false never cancels a replacement requested earlier
    pub requires_replace: bool,
}

/// Condition deciding whether an attribute change requires a replacement
pub trait RequiresReplaceIfFunc<T>: Send + Sync {
    fn requires_replace(&self, request: &Request<T>, response: &mut RequiresReplaceIfFuncResponse);
}

/// Plan modifier requiring the resource replacement if a condition holds.
///
/// The condition is evaluated only on updates where the attribute changes:
/// never on creation (null state), destruction (null plan), or when the
/// planned value equals the prior one.
#[derive(Debug, Clone)]
pub struct RequiresReplaceIf<F> {
    f: F,
    description: String,
}

impl<F> RequiresReplaceIf<F> {
    pub fn new<S: Into<String>>(f: F, description: S) -> Self {
        Self {
            f,
            description: description.into(),
        }
    }
}

#[async_trait]
impl<T, F> PlanModifier<T> for RequiresReplaceIf<F>
where
    T: AttributeType,
    F: RequiresReplaceIfFunc<T>,
{
    fn description(&self) -> String {
        self.description.clone()
    }

    fn markdown_description(&self) -> String {
        self.description.clone()
    }

    async fn plan_modify(&self, request: &Request<T>, response: &mut Response<T>) {
        if request.state.is_null() {
            tracing::debug!(path = %request.path, "resource created, no replacement");
            return;
        }
        if request.plan.is_null() {
            tracing::debug!(path = %request.path, "resource destroyed, no replacement");
            return;
        }

        if request.plan_value == request.state_value {
            tracing::debug!(path = %request.path, "attribute unchanged, no replacement");
            return;
        }

        let mut func_response = RequiresReplaceIfFuncResponse::default();
        self.f.requires_replace(request, &mut func_response);

        merge_diagnostics(&mut response.diagnostics, func_response.diagnostics);
        if func_response.requires_replace {
            tracing::debug!(path = %request.path, "{}", self.description);
            response.requires_replace = true;
        }
    }
}

/// Condition holding when a boolean attribute of the plan has a given value.
///
/// A null or unknown attribute reads as `false`.
#[derive(Debug, Clone)]
pub struct BoolEquals<T> {
    path: Path,
    expected: bool,
    _type: PhantomData<fn() -> T>,
}

impl<T> BoolEquals<T> {
    pub fn new(path: Path, expected: bool) -> Self {
        Self {
            path,
            expected,
            _type: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn expected(&self) -> bool {
        self.expected
    }
}

impl<T> RequiresReplaceIfFunc<T> for BoolEquals<T> {
    fn requires_replace(&self, request: &Request<T>, response: &mut RequiresReplaceIfFuncResponse) {
        let value = match request.plan.get_attribute::<bool>(&self.path) {
            Ok(Value::Value(value)) => value,
            Ok(Value::Null | Value::Unknown) => false,
            Err(err) => {
                response.diagnostics.error(
                    "Invalid attribute path",
                    format!("Unable to read `{}` as a boolean: {err:#}", self.path),
                    request.path.to_attribute_path(),
                );
                return;
            }
        };

        if value == self.expected {
            response.requires_replace = true;
        }
    }
}

/// Require replacement when the plan value of the boolean attribute `path` is `expected`
pub fn require_replace_if_bool<T>(path: Path, expected: bool) -> RequiresReplaceIf<BoolEquals<T>> {
    let description = format!("Attribute require replacement if `{path}` is `{expected}`");
    RequiresReplaceIf::new(BoolEquals::new(path, expected), description)
}
