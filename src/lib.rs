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

//! Plan modifiers for Terraform providers built on [`tf_provider`].
//!
//! A plan modifier adjusts the planned value of one attribute before the
//! change is applied. Each attribute type has its own module:
//! [`boolplanmodifier`], [`int32planmodifier`], [`int64planmodifier`] and
//! [`stringplanmodifier`].

pub mod default;
mod family;
pub mod path;
pub mod planmodifier;
pub mod replace;
pub mod transform;
pub mod tree;
pub mod value;

pub mod boolplanmodifier;
pub mod int32planmodifier;
pub mod int64planmodifier;
pub mod stringplanmodifier;

#[cfg(test)]
mod testing;

pub use path::Path;
pub use planmodifier::{apply_all, PlanModifier, Request, Response};
pub use tree::Raw;
pub use value::AttributeType;
