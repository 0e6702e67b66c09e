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

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use tf_provider::Value;

use crate::path::{Path, PathStep};
use crate::value::AttributeType;

static NULL: Raw = Raw::Null;
static UNKNOWN: Raw = Raw::Unknown;

/// Dynamically typed value of a whole resource (plan, state or config)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Raw {
    #[default]
    Null,
    Unknown,
    Bool(bool),
    Number(i64),
    String(String),
    List(Vec<Raw>),
    Object(BTreeMap<String, Raw>),
}

impl Raw {
    pub fn object<I, K>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Raw)>,
        K: Into<String>,
    {
        Raw::Object(
            attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Raw::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Raw::Unknown)
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Raw::Null => "null",
            Raw::Unknown => "unknown",
            Raw::Bool(_) => "bool",
            Raw::Number(_) => "number",
            Raw::String(_) => "string",
            Raw::List(_) => "list",
            Raw::Object(_) => "object",
        }
    }

    /// Walk the tree down to `path`.
    ///
    /// Descending through a null (resp. unknown) node yields null (resp. unknown).
    pub fn get(&self, path: &Path) -> Result<&Raw> {
        let root = PathStep::Attribute(path.root_name().to_owned());
        let mut node = self;
        for step in std::iter::once(&root).chain(path.steps()) {
            node = match (node, step) {
                (Raw::Null, _) => return Ok(&NULL),
                (Raw::Unknown, _) => return Ok(&UNKNOWN),
                (Raw::Object(attrs), PathStep::Attribute(name)) => match attrs.get(name) {
                    Some(child) => child,
                    None => bail!("attribute {name:?} does not exist in {path}"),
                },
                (Raw::Object(attrs), PathStep::Key(key)) => attrs.get(key).unwrap_or(&NULL),
                (Raw::List(elements), PathStep::Index(idx)) => match elements.get(*idx) {
                    Some(child) => child,
                    None => bail!(
                        "index {idx} is out of range in {path} (length {})",
                        elements.len()
                    ),
                },
                (other, step) => bail!("cannot resolve {step:?} on a {} in {path}", other.kind()),
            };
        }
        Ok(node)
    }

    /// Read the attribute at `path` as a typed tri-state value
    pub fn get_attribute<T: AttributeType>(&self, path: &Path) -> Result<Value<T>> {
        Ok(match self.get(path)? {
            Raw::Null => Value::Null,
            Raw::Unknown => Value::Unknown,
            leaf => Value::Value(T::from_raw(leaf)?),
        })
    }
}

impl<T: AttributeType> From<Value<T>> for Raw {
    fn from(value: Value<T>) -> Self {
        match value {
            Value::Value(v) => v.into_raw(),
            Value::Null => Raw::Null,
            Value::Unknown => Raw::Unknown,
        }
    }
}
