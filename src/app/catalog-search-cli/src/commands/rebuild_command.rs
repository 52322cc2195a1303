// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use catalog_search::SearchSynchronizationService;

use super::Command;
use crate::{CLIError, CommandOutput};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct RebuildCommand {
    sync_svc: Arc<dyn SearchSynchronizationService>,
}

impl RebuildCommand {
    pub fn new(sync_svc: Arc<dyn SearchSynchronizationService>) -> Self {
        Self { sync_svc }
    }
}

#[async_trait::async_trait]
impl Command for RebuildCommand {
    fn needs_indices(&self) -> bool {
        true
    }

    async fn run(&mut self) -> Result<CommandOutput, CLIError> {
        let report = self.sync_svc.rebuild_search_index().await?;
        CommandOutput::from_serializable(&report)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
