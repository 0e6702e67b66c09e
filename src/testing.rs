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

use std::io::Write;
use std::sync::{Arc, Mutex};

use tf_provider::Value;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::planmodifier::{PlanModifier, Request, Response};
use crate::tree::Raw;
use crate::value::AttributeType;

/// Run `modifier` the way the host does, starting from the proposed plan value
pub(crate) async fn run<T, M>(modifier: &M, request: &Request<T>) -> Response<T>
where
    T: AttributeType,
    M: PlanModifier<T>,
{
    let mut response = Response::new(request);
    modifier.plan_modify(request, &mut response).await;
    response
}

pub(crate) fn default_request<T>(
    state_value: Value<T>,
    plan_value: Value<T>,
    config_value: Value<T>,
) -> Request<T> {
    Request {
        state_value,
        plan_value,
        config_value,
        ..Request::new("testattr")
    }
}

/// Resource with the modified attribute `testattr` and a `testbool` sibling set to true
pub(crate) fn resource<T: AttributeType>(value: Value<T>) -> Raw {
    Raw::object([("testattr", Raw::from(value)), ("testbool", Raw::Bool(true))])
}

/// Request as seen by a modifier on `testattr`, with whole-resource plan and state.
/// `plan_null` and `state_null` model destruction and creation.
pub(crate) fn replace_request<T: AttributeType>(
    plan_value: Value<T>,
    state_value: Value<T>,
    plan_null: bool,
    state_null: bool,
) -> Request<T> {
    Request {
        plan: if plan_null {
            Raw::Null
        } else {
            resource(plan_value.clone())
        },
        plan_value,
        state: if state_null {
            Raw::Null
        } else {
            resource(state_value.clone())
        },
        state_value,
        ..Request::new("testattr")
    }
}

/// Log lines emitted on the current thread while the guard is alive
#[derive(Debug, Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        (logs, tracing::subscriber::set_default(subscriber))
    }

    pub(crate) fn contents(&self) -> String {
        let buf = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut logs) = self.0.lock() {
            logs.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
