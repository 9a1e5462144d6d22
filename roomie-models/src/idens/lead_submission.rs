//! Append-only lead table shared by every intake form.

use crate::initializer::{InitContext, TableInitializer};
use roomie_macros::UnseedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_LEAD_ORDER,
    create_table = create_lead_submission_table,
    create_indexes = create_lead_submission_indexes
))]
pub enum LeadSubmission {
    Table,
    Id,
    Type,
    Name,
    Email,
    Phone,
    Role,
    Property,
    PropertySize,
    Comment,
    DataProcessing,
    Marketing,
    Language,
    UtmSource,
    UtmMedium,
    UtmCampaign,
    UtmTerm,
    UtmContent,
    Referrer,
    MailchimpStatus,
    CreatedAt,
}

fn create_lead_submission_table(_backend: DatabaseBackend) -> TableCreateStatement {
    let optional = |col: LeadSubmission, len: u32| {
        ColumnDef::new(col).string_len(len).null().to_owned()
    };

    Table::create()
        .table(LeadSubmission::Table)
        .if_not_exists()
        .col(pk_auto(LeadSubmission::Id))
        .col(
            ColumnDef::new(LeadSubmission::Type)
                .string_len(20)
                .not_null()
                .comment("Form the lead came from"),
        )
        .col(
            ColumnDef::new(LeadSubmission::Name)
                .string_len(200)
                .not_null()
                .comment("Contact name"),
        )
        .col(optional(LeadSubmission::Email, 255))
        .col(optional(LeadSubmission::Phone, 64))
        .col(optional(LeadSubmission::Role, 255))
        .col(optional(LeadSubmission::Property, 255))
        .col(optional(LeadSubmission::PropertySize, 255))
        .col(ColumnDef::new(LeadSubmission::Comment).text().null())
        .col(
            ColumnDef::new(LeadSubmission::DataProcessing)
                .boolean()
                .not_null()
                .comment("Consent to data processing"),
        )
        .col(
            ColumnDef::new(LeadSubmission::Marketing)
                .boolean()
                .not_null()
                .default(false)
                .comment("Consent to marketing mail"),
        )
        .col(
            ColumnDef::new(LeadSubmission::Language)
                .string_len(16)
                .not_null()
                .default("en"),
        )
        .col(optional(LeadSubmission::UtmSource, 255))
        .col(optional(LeadSubmission::UtmMedium, 255))
        .col(optional(LeadSubmission::UtmCampaign, 255))
        .col(optional(LeadSubmission::UtmTerm, 255))
        .col(optional(LeadSubmission::UtmContent, 255))
        .col(ColumnDef::new(LeadSubmission::Referrer).text().null())
        .col(
            ColumnDef::new(LeadSubmission::MailchimpStatus)
                .string_len(32)
                .not_null()
                .default("pending")
                .comment("Mailing-list sync state"),
        )
        .col(
            ColumnDef::new(LeadSubmission::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp())
                .comment("Submitted at"),
        )
        .to_owned()
}

fn create_lead_submission_indexes(
    _backend: DatabaseBackend,
) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .if_not_exists()
            .name("idx_lead_submission_type_created_at")
            .table(LeadSubmission::Table)
            .col(LeadSubmission::Type)
            .col(LeadSubmission::CreatedAt)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_lead_submission_email")
            .table(LeadSubmission::Table)
            .col(LeadSubmission::Email)
            .to_owned(),
    ])
}
