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

/// Constructors shared by every attribute type
macro_rules! plan_modifiers {
    ($t:ty) => {
        /// Plan `value` when the attribute is neither configured nor planned yet
        pub fn set_default(value: $t) -> $crate::default::SetDefault<$crate::default::Constant<$t>> {
            $crate::default::SetDefault::new($crate::default::Constant(value), "Set default value")
        }

        /// Plan the value of the environment variable `name` when the attribute
        /// is neither configured nor planned yet
        pub fn set_default_env_var<S: Into<String>>(
            name: S,
        ) -> $crate::default::SetDefault<$crate::default::FromEnv<$t>> {
            $crate::default::SetDefault::new(
                $crate::default::FromEnv::new(name),
                "Set default value from environment variable",
            )
        }

        /// Same as [`set_default_env_var`], reading variables through `lookup`
        pub fn set_default_env_var_with<S, L>(
            name: S,
            lookup: L,
        ) -> $crate::default::SetDefault<$crate::default::FromEnv<$t, L>>
        where
            S: Into<String>,
            L: $crate::default::EnvLookup,
        {
            $crate::default::SetDefault::new(
                $crate::default::FromEnv::with_lookup(name, lookup),
                "Set default value from environment variable",
            )
        }

        /// Plan the value computed by `f` when the attribute is neither
        /// configured nor planned yet
        pub fn set_default_func<F>(f: F) -> $crate::default::SetDefault<$crate::default::Callback<F>>
        where
            F: Fn(
                    &$crate::planmodifier::Request<$t>,
                    &mut $crate::default::DefaultFuncResponse<$t>,
                ) + Send
                + Sync,
        {
            $crate::default::SetDefault::new($crate::default::Callback(f), "Set default value")
        }

        /// Require replacement when the boolean attribute `path` is planned to `expected`
        pub fn require_replace_if_bool(
            path: $crate::path::Path,
            expected: bool,
        ) -> $crate::replace::RequiresReplaceIf<$crate::replace::BoolEquals<$t>> {
            $crate::replace::require_replace_if_bool(path, expected)
        }
    };
}

pub(crate) use plan_modifiers;
