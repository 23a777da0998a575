// 🧠 Logic - one input line in, one result out
//
// parse → execute → (save). The model lives here; the shell only reads it.
// A line either fully succeeds (in memory and on disk) or leaves the model
// as it was.

use crate::clock::Clock;
use crate::commands::CommandResult;
use crate::entities::{Client, Transaction};
use crate::error::TrackerError;
use crate::model::{Model, ModelManager};
use crate::parser::TrackerParser;
use crate::storage::JsonStorage;

pub struct Logic {
    model: ModelManager,
    parser: TrackerParser,
    storage: Option<JsonStorage>,
}

impl Logic {
    pub fn new(model: ModelManager, clock: Box<dyn Clock>) -> Self {
        Logic {
            model,
            parser: TrackerParser::new(clock),
            storage: None,
        }
    }

    /// Builder pattern: save after every mutating command
    pub fn with_storage(mut self, storage: JsonStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Run one line of user input to completion
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, TrackerError> {
        log::info!("[USER COMMAND] {}", line);

        let command = self.parser.parse_command(line).map_err(|e| {
            log::debug!("Parse failed: {}", e);
            e
        })?;
        let snapshot = match (&self.storage, command.is_mutating()) {
            (Some(_), true) => Some(self.model.clone()),
            _ => None,
        };

        let result = command.execute(&mut self.model).map_err(|e| {
            log::debug!("{} failed: {}", command.word(), e);
            e
        })?;

        if let (Some(storage), Some(snapshot)) = (&self.storage, snapshot) {
            if let Err(e) = storage.save(self.model.clients()) {
                log::warn!("Save failed, rolling back {}: {:#}", command.word(), e);
                self.model = snapshot;
                return Err(TrackerError::Storage(format!("{:#}", e)));
            }
        }

        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn filtered_client_list(&self) -> Vec<&Client> {
        self.model.filtered_client_list()
    }

    pub fn filtered_transaction_list(&self) -> Vec<&Transaction> {
        self.model.filtered_transaction_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::fixtures::typical_model;
    use crate::error::{CommandError, ParseError};
    use chrono::NaiveDate;

    fn logic() -> Logic {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2022, 3, 4).unwrap());
        Logic::new(typical_model(), Box::new(clock))
    }

    #[test]
    fn test_execute_success() {
        let mut logic = logic();
        let result = logic.execute("list").unwrap();
        assert_eq!(result.feedback, "Listed all clients");
    }

    #[test]
    fn test_execute_distinguishes_error_kinds() {
        let mut logic = logic();
        assert!(matches!(
            logic.execute("xyz").unwrap_err(),
            TrackerError::Parse(ParseError::UnknownCommand)
        ));
        assert!(matches!(
            logic.execute("delete 999 m/client").unwrap_err(),
            TrackerError::Command(CommandError::InvalidIndex { .. })
        ));
    }

    #[test]
    fn test_execute_saves_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("tracker.json"));
        let mut logic = logic().with_storage(storage.clone());

        logic.execute("find alice").unwrap();
        assert!(!storage.path().exists());

        logic.execute("sell 1 q/10 g/Apple p/0.8").unwrap();
        let saved = storage.load().unwrap();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[0].transactions.len(), 1);
    }

    #[test]
    fn test_failed_save_rolls_back_model() {
        let dir = tempfile::tempdir().unwrap();
        // Writing a file over a directory always fails
        let mut logic = logic().with_storage(JsonStorage::new(dir.path()));
        let before = logic.model().clients().to_vec();
        let line = "add n/Dana Scully ph/91234567 e/dana@example.com a/Georgetown";

        let err = logic.execute(line).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
        assert!(err.to_string().starts_with("Could not save data to file"));
        assert_eq!(logic.model().clients(), before.as_slice());

        // Retrying hits the same save error, not a duplicate
        assert!(matches!(logic.execute(line).unwrap_err(), TrackerError::Storage(_)));

        // Views are restored too
        logic.execute("find alice").unwrap();
        assert!(logic.execute("clear").is_err());
        assert_eq!(logic.filtered_client_list().len(), 1);
        assert_eq!(logic.model().clients().len(), 3);
    }
}
