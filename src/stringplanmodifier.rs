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

//! Plan modifiers for string attributes

use crate::default::{Constant, SetDefault};
use crate::transform::CaseFold;

crate::family::plan_modifiers!(String);

/// Plan an empty string when the attribute is neither configured nor planned yet
pub fn set_default_empty_string() -> SetDefault<Constant<String>> {
    set_default(String::new())
}

/// Plan the configured value in upper case
pub fn to_upper() -> CaseFold {
    crate::transform::to_upper()
}

/// Plan the configured value in lower case
pub fn to_lower() -> CaseFold {
    crate::transform::to_lower()
}
