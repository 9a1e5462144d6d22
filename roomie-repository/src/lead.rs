use roomie_error::StorageResult;
use roomie_models::{
    domain::prelude::NewLead,
    entities::prelude::{LeadSubmission, LeadSubmissionColumn, LeadSubmissionModel},
    enums::common::LeadType,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::instrument;

/// Repository for captured leads. Leads are only ever inserted.
pub struct LeadRepository;

impl LeadRepository {
    /// Insert one lead; identical submissions produce separate rows.
    #[instrument(name = "lead-create", skip_all, fields(lead_type = %lead.lead_type))]
    pub async fn create<C>(lead: NewLead, db: &C) -> StorageResult<LeadSubmissionModel>
    where
        C: ConnectionTrait,
    {
        Ok(lead.into_active_model().insert(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<LeadSubmissionModel>>
    where
        C: ConnectionTrait,
    {
        Ok(LeadSubmission::find_by_id(id).one(db).await?)
    }

    /// Leads of one type, newest first.
    pub async fn find_by_type<C>(
        lead_type: LeadType,
        db: &C,
    ) -> StorageResult<Vec<LeadSubmissionModel>>
    where
        C: ConnectionTrait,
    {
        Ok(LeadSubmission::find()
            .filter(LeadSubmissionColumn::LeadType.eq(lead_type))
            .order_by_desc(LeadSubmissionColumn::CreatedAt)
            .order_by_desc(LeadSubmissionColumn::Id)
            .all(db)
            .await?)
    }

    pub async fn count<C>(db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(LeadSubmission::find().count(db).await?)
    }
}
