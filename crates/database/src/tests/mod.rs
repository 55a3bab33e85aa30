
use crate::{error::DatabaseError, executor::Executor};
use async_trait::async_trait;
use model::{
    core::value::{FieldValue, Value},
    records::row::RowData,
};
use statement::SqlCommand;
use std::{collections::VecDeque, sync::Mutex};

/// An executor that records every command and replays canned results.
#[derive(Debug, Default)]
pub(crate) struct RecordingExecutor {
    pub commands: Mutex<Vec<SqlCommand>>,
    pub results: Mutex<VecDeque<Vec<RowData>>>,
    pub affected: u64,
}

impl RecordingExecutor {
    pub fn with_results(results: Vec<Vec<RowData>>) -> Self {
        RecordingExecutor {
            results: Mutex::new(results.into()),
            ..Default::default()
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.text.clone())
            .collect()
    }

    pub fn last(&self) -> SqlCommand {
        self.commands.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn query(&self, command: &SqlCommand) -> Result<Vec<RowData>, DatabaseError> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(self.results.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn execute(&self, command: &SqlCommand) -> Result<u64, DatabaseError> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(self.affected)
    }
}

/// One row with a single column.
pub(crate) fn scalar_row(name: &str, value: impl Into<Value>) -> Vec<RowData> {
    vec![RowData::new(vec![FieldValue::new(name, value.into())])]
}
