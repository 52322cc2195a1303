// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod analytics_command;
mod delete_command;
mod health_command;
mod rebuild_command;
mod search_command;
mod suggest_command;
mod sync_command;

pub use analytics_command::*;
pub use delete_command::*;
pub use health_command::*;
pub use rebuild_command::*;
pub use search_command::*;
pub use suggest_command::*;
pub use sync_command::*;

use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait Command: Send {
    /// Commands that write documents need the indices to exist
    fn needs_indices(&self) -> bool {
        false
    }

    async fn run(&mut self) -> Result<CommandOutput, CLIError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
