// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::Write;

use internal_error::ResultIntoInternal;
use serde::Serialize;

use crate::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// JSON document a command prints on stdout
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput(pub serde_json::Value);

impl CommandOutput {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, CLIError> {
        Ok(Self(serde_json::to_value(value).int_err()?))
    }

    pub fn write_to(&self, mut writer: impl Write) -> Result<(), CLIError> {
        serde_json::to_writer_pretty(&mut writer, &self.0).int_err()?;
        writeln!(writer).int_err()?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
