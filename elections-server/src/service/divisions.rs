//! Division service - lookups by election, nomination view, bulk insert
//!
//! Every public operation returns [`ServiceError`] on failure; the internal
//! reason is reduced by [`collapse`] at the end of each call.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::error::{collapse, DivisionError, Operation, ServiceError};
use super::ids::IdGenerator;
use super::mapper;
use crate::db::DivisionRepository;
use crate::models::{
    DivisionInput, DivisionRecord, DivisionView, DivisionWithNominationView, InsertedDivisions,
};

#[derive(Clone)]
pub struct DivisionService {
    repo: Arc<dyn DivisionRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl DivisionService {
    pub fn new(repo: Arc<dyn DivisionRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repo, ids }
    }

    /// Divisions of an election, mapped for presentation.
    ///
    /// An election without divisions is a failure, like any repository error.
    #[instrument(skip(self))]
    pub async fn get_divisions_by_election_id(
        &self,
        election_id: &str,
    ) -> Result<Vec<DivisionView>, ServiceError> {
        self.divisions_by_election(election_id)
            .await
            .map_err(|e| collapse(Operation::DivisionsByElection, e))
    }

    /// Divisions eligible for nomination by `team_id` in the election.
    #[instrument(skip(self))]
    pub async fn get_divisions_with_nomination(
        &self,
        election_id: &str,
        team_id: &str,
    ) -> Result<Vec<DivisionWithNominationView>, ServiceError> {
        self.divisions_with_nomination(election_id, team_id)
            .await
            .map_err(|e| collapse(Operation::DivisionsWithNomination, e))
    }

    /// Insert a batch of divisions under `module_id`.
    ///
    /// Each input gets a fresh id. The repository result is returned as-is.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn add_divisions_by_module_id(
        &self,
        module_id: &str,
        inputs: Vec<DivisionInput>,
    ) -> Result<InsertedDivisions, ServiceError> {
        self.insert_batch(module_id, inputs)
            .await
            .map_err(|e| collapse(Operation::AddDivisionsByModule, e))
    }

    /// Same as [`Self::add_divisions_by_module_id`], decoding the raw JSON
    /// request body first. A body that is not an array of objects fails
    /// like any other insert error.
    #[instrument(skip(self, body), fields(bytes = body.len()))]
    pub async fn add_divisions_from_json(
        &self,
        module_id: &str,
        body: &[u8],
    ) -> Result<InsertedDivisions, ServiceError> {
        let decoded = serde_json::from_slice::<Vec<DivisionInput>>(body)
            .map_err(|e| DivisionError::MalformedBody(e.to_string()));

        match decoded {
            Ok(inputs) => self.add_divisions_by_module_id(module_id, inputs).await,
            Err(e) => Err(collapse(Operation::AddDivisionsByModule, e)),
        }
    }

    async fn divisions_by_election(
        &self,
        election_id: &str,
    ) -> Result<Vec<DivisionView>, DivisionError> {
        let rows = self.repo.fetch_divisions_by_election_id(election_id).await?;
        if rows.is_empty() {
            return Err(DivisionError::NotFound);
        }

        debug!(count = rows.len(), "divisions fetched");
        Ok(mapper::map_to_division_model(rows))
    }

    async fn divisions_with_nomination(
        &self,
        election_id: &str,
        team_id: &str,
    ) -> Result<Vec<DivisionWithNominationView>, DivisionError> {
        let rows = self
            .repo
            .fetch_divisions_with_nomination(election_id, team_id)
            .await?;
        if rows.is_empty() {
            return Err(DivisionError::NotFound);
        }

        debug!(count = rows.len(), "nomination rows fetched");
        Ok(mapper::map_to_division_model_with_nominations(rows))
    }

    async fn insert_batch(
        &self,
        module_id: &str,
        inputs: Vec<DivisionInput>,
    ) -> Result<InsertedDivisions, DivisionError> {
        let divisions: Vec<DivisionRecord> = inputs
            .into_iter()
            .map(|input| DivisionRecord::from_input(self.ids.next_id(), module_id, input))
            .collect();

        let result = self.repo.insert_divisions_by_module_id(divisions).await?;
        info!(module_id, inserted = result.inserted, "divisions inserted");
        Ok(result)
    }
}
