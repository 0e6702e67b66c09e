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

use std::fmt::Display;

use tf_provider::AttributePath;

/// One step of a [`Path`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    /// Nested attribute of an object
    Attribute(String),
    /// Element of a list
    Index(usize),
    /// Element of a map
    Key(String),
}

/// Location of an attribute inside a resource, starting from a root attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    root: String,
    steps: Vec<PathStep>,
}

impl Path {
    pub fn root<T: Into<String>>(name: T) -> Self {
        Self {
            root: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn attribute<T: Into<String>>(mut self, name: T) -> Self {
        self.steps.push(PathStep::Attribute(name.into()));
        self
    }

    pub fn index(mut self, idx: usize) -> Self {
        self.steps.push(PathStep::Index(idx));
        self
    }

    pub fn key<T: Into<String>>(mut self, key: T) -> Self {
        self.steps.push(PathStep::Key(key.into()));
        self
    }

    pub fn root_name(&self) -> &str {
        &self.root
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// Path used to attach diagnostics to this attribute
    pub fn to_attribute_path(&self) -> AttributePath {
        self.steps
            .iter()
            .fold(AttributePath::new(self.root.clone()), |attr_path, step| {
                match step {
                    PathStep::Attribute(name) => attr_path.attribute(name.clone()),
                    PathStep::Index(idx) => {
                        attr_path.index(i64::try_from(*idx).unwrap_or(i64::MAX))
                    }
                    PathStep::Key(key) => attr_path.key(key.clone()),
                }
            })
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.root)?;
        for step in &self.steps {
            match step {
                PathStep::Attribute(name) => write!(f, ".{name}")?,
                PathStep::Index(idx) => write!(f, "[{idx}]")?,
                PathStep::Key(key) => write!(f, "[{key:?}]")?,
            }
        }
        Ok(())
    }
}

impl From<&Path> for AttributePath {
    fn from(value: &Path) -> Self {
        value.to_attribute_path()
    }
}
