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

//! Plan modifiers for 64-bit integer attributes

crate::family::plan_modifiers!(i64);

#[cfg(test)]
mod tests {
    use tf_provider::Value;

    use crate::path::Path;
    use crate::testing::{default_request, replace_request, run};

    #[tokio::test]
    async fn default_func_plan_modify() {
        const EXPECTED_VALUE: i64 = 123;
        let modifier = super::set_default_func(|_, response| {
            response.value = EXPECTED_VALUE;
        });

        let test_cases = [
            (
                "null-state",
                default_request(Value::Null, Value::Unknown, Value::Null),
                Value::Value(EXPECTED_VALUE),
            ),
            (
                "known-plan",
                default_request(Value::Value(10), Value::Value(11), Value::Null),
                Value::Value(11),
            ),
            (
                "non-null-state-unknown-plan",
                default_request(Value::Value(10), Value::Unknown, Value::Null),
                Value::Value(EXPECTED_VALUE),
            ),
            (
                "unknown-config",
                default_request(Value::Value(10), Value::Unknown, Value::Unknown),
                Value::Value(EXPECTED_VALUE),
            ),
            (
                "known-config",
                default_request(Value::Value(10), Value::Unknown, Value::Value(7)),
                Value::Unknown,
            ),
            (
                "stable-plan",
                default_request(Value::Value(10), Value::Value(10), Value::Null),
                Value::Value(10),
            ),
        ];

        for (name, request, expected) in test_cases {
            let response = run(&modifier, &request).await;
            assert_eq!(response.plan_value, expected, "{name}");
            assert!(response.diagnostics.errors.is_empty(), "{name}");
        }
    }

    #[tokio::test]
    async fn default_plan_modify() {
        let modifier = super::set_default(5_000_000_000);

        let response = run(
            &modifier,
            &default_request(Value::Null, Value::Unknown, Value::Null),
        )
        .await;
        assert_eq!(response.plan_value, Value::Value(5_000_000_000));

        let response = run(
            &modifier,
            &default_request(Value::Value(4), Value::Value(4), Value::Null),
        )
        .await;
        assert_eq!(response.plan_value, Value::Value(4));
    }

    #[tokio::test]
    async fn default_env_var_plan_modify() {
        let modifier =
            super::set_default_env_var_with("TEST_VAR", |_: &str| Some("123".to_owned()));

        let test_cases = [
            (
                "null-state",
                default_request(Value::Null, Value::Unknown, Value::Null),
                Value::Value(123),
            ),
            (
                "known-plan",
                default_request(Value::Value(10), Value::Value(11), Value::Null),
                Value::Value(11),
            ),
            (
                "non-null-state-unknown-plan",
                default_request(Value::Value(10), Value::Unknown, Value::Null),
                Value::Value(123),
            ),
            (
                "unknown-config",
                default_request(Value::Value(10), Value::Unknown, Value::Unknown),
                Value::Value(123),
            ),
            (
                "stable-plan",
                default_request(Value::Null, Value::Null, Value::Null),
                Value::Null,
            ),
        ];

        for (name, request, expected) in test_cases {
            let response = run(&modifier, &request).await;
            assert_eq!(response.plan_value, expected, "{name}");
            assert!(response.diagnostics.errors.is_empty(), "{name}");
        }
    }

    #[tokio::test]
    async fn default_env_var_wide_values() {
        let request = default_request(Value::Null, Value::Unknown, Value::Null);

        for (raw, expected) in [
            ("-9223372036854775808", i64::MIN),
            ("+4294967296", 4_294_967_296),
        ] {
            let modifier =
                super::set_default_env_var_with("TEST_VAR", move |_: &str| Some(raw.to_owned()));
            let response = run(&modifier, &request).await;
            assert_eq!(response.plan_value, Value::Value(expected), "{raw}");
        }
    }

    #[tokio::test]
    async fn default_env_var_not_int64() {
        let request = default_request(Value::Null, Value::Unknown, Value::Null);

        for invalid in ["abc", "9223372036854775808", "12.5"] {
            let modifier =
                super::set_default_env_var_with("TEST_VAR", move |_: &str| Some(invalid.to_owned()));
            let response = run(&modifier, &request).await;
            assert_eq!(response.plan_value, Value::Unknown, "{invalid}");
            assert_eq!(response.diagnostics.errors.len(), 1, "{invalid}");
            assert_eq!(
                response.diagnostics.errors[0].summary,
                "Environment variable set but is not Int64",
                "{invalid}"
            );
            assert_eq!(
                response.diagnostics.errors[0].detail,
                "The environment variable TEST_VAR is set but is not a Int64",
                "{invalid}"
            );
        }
    }

    #[tokio::test]
    async fn require_replace_if_bool() {
        let modifier = super::require_replace_if_bool(Path::root("testbool"), true);

        let test_cases = [
            (
                "state-null",
                replace_request::<i64>(Value::Unknown, Value::Null, false, true),
                false,
            ),
            (
                "plan-null",
                replace_request(Value::Null, Value::Value(10), true, false),
                false,
            ),
            (
                "planvalue-statevalue-different",
                replace_request(Value::Value(20), Value::Value(10), false, false),
                true,
            ),
            (
                "planvalue-statevalue-equal",
                replace_request(Value::Value(10), Value::Value(10), false, false),
                false,
            ),
        ];

        for (name, request, expected) in test_cases {
            let response = run(&modifier, &request).await;
            assert_eq!(response.requires_replace, expected, "{name}");
            assert_eq!(response.plan_value, request.plan_value, "{name}");
        }
    }
}
