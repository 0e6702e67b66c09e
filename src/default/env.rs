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

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use crate::planmodifier::Request;
use crate::value::AttributeType;

use super::{DefaultFunc, DefaultFuncResponse};

/// Read access to environment variables
pub trait EnvLookup: Send + Sync {
    /// Value of the variable `name`, if set
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Environment of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn lookup(&self, name: &str) -> Option<String> {
        self(name)
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Default value of type `T` read from an environment variable.
///
/// An empty variable is treated as unset.
#[derive(Debug, Clone)]
pub struct FromEnv<T, L = ProcessEnv> {
    name: String,
    lookup: L,
    _type: PhantomData<fn() -> T>,
}

impl<T> FromEnv<T> {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::with_lookup(name, ProcessEnv)
    }
}

impl<T, L: EnvLookup> FromEnv<T, L> {
    pub fn with_lookup<S: Into<String>>(name: S, lookup: L) -> Self {
        Self {
            name: name.into(),
            lookup,
            _type: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T, L> DefaultFunc<T> for FromEnv<T, L>
where
    T: AttributeType,
    L: EnvLookup,
{
    fn default_value(&self, request: &Request<T>, response: &mut DefaultFuncResponse<T>) {
        let attr_path = request.path.to_attribute_path();

        let Some(raw) = self.lookup.lookup(&self.name).filter(|v| !v.is_empty()) else {
            response.diagnostics.error(
                "Environment variable not set",
                format!("The environment variable {} is not set", self.name),
                attr_path,
            );
            return;
        };

        match T::parse(&raw) {
            Ok(value) => response.value = value,
            Err(err) => {
                tracing::debug!(variable = %self.name, "{err:#}");
                response.diagnostics.error(
                    format!("Environment variable set but is not {}", T::NAME),
                    format!(
                        "The environment variable {} is set but is not a {}",
                        self.name,
                        T::NAME
                    ),
                    attr_path,
                );
            }
        }
    }
}
