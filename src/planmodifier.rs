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

use crate::path::Path;
use crate::tree::Raw;
use crate::value::AttributeType;

/// Everything a plan modifier may look at for a single attribute
#[derive(Debug, Clone)]
pub struct Request<T> {
    /// Location of the attribute being modified
    pub path: Path,
    /// Whole resource configuration
    pub config: Raw,
    /// Attribute value written by the user
    pub config_value: Value<T>,
    /// Whole proposed new state
    pub plan: Raw,
    /// Attribute value in the proposed new state
    pub plan_value: Value<T>,
    /// Whole prior state
    pub state: Raw,
    /// Attribute value in the prior state
    pub state_value: Value<T>,
}

impl<T> Request<T> {
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self {
            path: Path::root(path),
            config: Raw::Null,
            config_value: Value::Null,
            plan: Raw::Null,
            plan_value: Value::Null,
            state: Raw::Null,
            state_value: Value::Null,
        }
    }
}

/// Outcome of a plan modifier
#[derive(Debug, Default)]
pub struct Response<T> {
    pub plan_value: Value<T>,
    pub requires_replace: bool,
    pub diagnostics: Diagnostics,
}

impl<T: Clone> Response<T> {
    /// Response leaving the plan as proposed
    pub fn new(request: &Request<T>) -> Self {
        Self {
            plan_value: request.plan_value.clone(),
            requires_replace: false,
            diagnostics: Default::default(),
        }
    }
}

#[async_trait]
pub trait PlanModifier<T: AttributeType>: Send + Sync {
    /// Plain text description, used for documentation
    fn description(&self) -> String;

    /// Markdown description, used for documentation
    fn markdown_description(&self) -> String;

    /// Adjust the planned value of the attribute
    async fn plan_modify(&self, request: &Request<T>, response: &mut Response<T>);
}

pub(crate) fn merge_diagnostics(into: &mut Diagnostics, from: Diagnostics) {
    into.errors.extend(from.errors);
    into.warnings.extend(from.warnings);
}

/// Run a chain of modifiers on one attribute.
///
/// Each modifier sees the plan value produced by the previous one.
/// The chain stops at the first modifier reporting an error.
pub async fn apply_all<T: AttributeType>(
    modifiers: &[Box<dyn PlanModifier<T>>],
    request: &Request<T>,
) -> Response<T> {
    let mut request = request.clone();
    let mut response = Response::new(&request);

    for modifier in modifiers {
        let mut step = Response::new(&request);
        modifier.plan_modify(&request, &mut step).await;

        merge_diagnostics(&mut response.diagnostics, step.diagnostics);
        response.requires_replace |= step.requires_replace;
        if !response.diagnostics.errors.is_empty() {
            tracing::debug!(
                path = %request.path,
                modifier = %modifier.description(),
                "plan modifier chain stopped on error"
            );
            break;
        }

        request.plan_value = step.plan_value.clone();
        response.plan_value = step.plan_value;
    }

    response
}
