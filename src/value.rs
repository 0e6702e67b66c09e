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

use std::fmt::Debug;

use anyhow::{anyhow, bail, Context, Result};

use crate::tree::Raw;

/// Primitive carried by a plan-modifiable attribute
pub trait AttributeType: Sized + Clone + PartialEq + Default + Debug + Send + Sync + 'static {
    /// Name used in diagnostics
    const NAME: &'static str;

    /// Parse the textual form found in environment variables
    fn parse(s: &str) -> Result<Self>;

    /// Extract a known value from a tree leaf
    fn from_raw(raw: &Raw) -> Result<Self>;

    fn into_raw(self) -> Raw;
}

impl AttributeType for bool {
    const NAME: &'static str = "Boolean";

    fn parse(s: &str) -> Result<Self> {
        match s {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(anyhow!("invalid boolean literal {s:?}")),
        }
    }

    fn from_raw(raw: &Raw) -> Result<Self> {
        match raw {
            Raw::Bool(b) => Ok(*b),
            other => bail!("expected a bool, found {}", other.kind()),
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Bool(self)
    }
}

impl AttributeType for i32 {
    const NAME: &'static str = "Int32";

    fn parse(s: &str) -> Result<Self> {
        s.parse::<i32>()
            .with_context(|| format!("invalid 32-bit integer literal {s:?}"))
    }

    fn from_raw(raw: &Raw) -> Result<Self> {
        match raw {
            Raw::Number(n) => {
                i32::try_from(*n).with_context(|| format!("{n} does not fit in a 32-bit integer"))
            }
            other => bail!("expected a number, found {}", other.kind()),
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Number(self.into())
    }
}

impl AttributeType for i64 {
    const NAME: &'static str = "Int64";

    fn parse(s: &str) -> Result<Self> {
        s.parse::<i64>()
            .with_context(|| format!("invalid 64-bit integer literal {s:?}"))
    }

    fn from_raw(raw: &Raw) -> Result<Self> {
        match raw {
            Raw::Number(n) => Ok(*n),
            other => bail!("expected a number, found {}", other.kind()),
        }
    }

    fn into_raw(self) -> Raw {
        Raw::Number(self)
    }
}

impl AttributeType for String {
    const NAME: &'static str = "String";

    fn parse(s: &str) -> Result<Self> {
        Ok(s.to_owned())
    }

    fn from_raw(raw: &Raw) -> Result<Self> {
        match raw {
            Raw::String(s) => Ok(s.clone()),
            other => bail!("expected a string, found {}", other.kind()),
        }
    }

    fn into_raw(self) -> Raw {
        Raw::String(self)
    }
}
