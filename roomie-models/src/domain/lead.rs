//! Lead intake schemas.
//!
//! Every form posts the same family of fields; what differs per lead type is
//! which of them are required. Each schema deserializes from the camelCase
//! JSON the site sends and validates with `validator`. After validation,
//! [`LeadForm::into_new_lead`] maps it onto the single insert shape
//! [`NewLead`].

use crate::{
    constants::{DEFAULT_LANGUAGE, MAILCHIMP_STATUS_PENDING},
    enums::common::LeadType,
};
use chrono::{DateTime, Utc};
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Row shape inserted for every lead, regardless of the form it came from.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
#[sea_orm(active_model = "crate::entities::lead_submission::ActiveModel")]
pub struct NewLead {
    pub lead_type: LeadType,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub property: Option<String>,
    pub property_size: Option<String>,
    pub comment: Option<String>,
    pub data_processing: bool,
    pub marketing: bool,
    pub language: String,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_term: Option<String>,
    pub utm_content: Option<String>,
    pub referrer: Option<String>,
    pub mailchimp_status: String,
    pub created_at: DateTime<Utc>,
}

/// A validated form payload that knows its lead type.
pub trait LeadForm: Validate + Send + 'static {
    const LEAD_TYPE: LeadType;

    fn into_new_lead(self) -> NewLead;
}

/// Contact fields; their requiredness is decided per form.
struct LeadContact {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    property: Option<String>,
    property_size: Option<String>,
}

/// Fields every lead form accepts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeadExtras {
    #[validate(length(max = 255, message = "role must be at most 255 characters"))]
    pub role: Option<String>,
    #[validate(length(max = 5000, message = "comment must be at most 5000 characters"))]
    pub comment: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_consent"))]
    pub data_processing: bool,
    #[serde(default)]
    pub marketing: bool,
    #[validate(length(min = 2, max = 10, message = "language must be a language tag"))]
    pub language: Option<String>,
    #[validate(length(max = 255))]
    pub utm_source: Option<String>,
    #[validate(length(max = 255))]
    pub utm_medium: Option<String>,
    #[validate(length(max = 255))]
    pub utm_campaign: Option<String>,
    #[validate(length(max = 255))]
    pub utm_term: Option<String>,
    #[validate(length(max = 255))]
    pub utm_content: Option<String>,
    #[validate(length(max = 2048, message = "referrer must be at most 2048 characters"))]
    pub referrer: Option<String>,
}

impl LeadExtras {
    fn into_new_lead(self, lead_type: LeadType, contact: LeadContact) -> NewLead {
        NewLead {
            lead_type,
            // required fields are checked by `Validate` before mapping
            name: contact.name.unwrap_or_default(),
            email: contact.email,
            phone: contact.phone,
            role: self.role,
            property: contact.property,
            property_size: contact.property_size,
            comment: self.comment,
            data_processing: self.data_processing,
            marketing: self.marketing,
            language: self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.into()),
            utm_source: self.utm_source,
            utm_medium: self.utm_medium,
            utm_campaign: self.utm_campaign,
            utm_term: self.utm_term,
            utm_content: self.utm_content,
            referrer: self.referrer,
            mailchimp_status: MAILCHIMP_STATUS_PENDING.into(),
            created_at: Utc::now(),
        }
    }
}

fn validate_consent(data_processing: &bool) -> Result<(), ValidationError> {
    if *data_processing {
        Ok(())
    } else {
        Err(ValidationError::new("consent_required")
            .with_message("consent to data processing is required".into()))
    }
}

/// `POST /leads/contact`
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactLead {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be 1..=200 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address"),
        length(max = 255)
    )]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "phone must be at most 64 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub property: Option<String>,
    #[validate(length(max = 255))]
    pub property_size: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub extras: LeadExtras,
}

impl LeadForm for NewContactLead {
    const LEAD_TYPE: LeadType = LeadType::Contact;

    fn into_new_lead(self) -> NewLead {
        self.extras.into_new_lead(
            Self::LEAD_TYPE,
            LeadContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
                property: self.property,
                property_size: self.property_size,
            },
        )
    }
}

/// `POST /leads/demo-request`
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewDemoLead {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be 1..=200 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address"),
        length(max = 255)
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "phone is required"),
        length(min = 5, max = 64, message = "phone must be 5..=64 characters")
    )]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub property: Option<String>,
    #[validate(length(max = 255))]
    pub property_size: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub extras: LeadExtras,
}

impl LeadForm for NewDemoLead {
    const LEAD_TYPE: LeadType = LeadType::Demo;

    fn into_new_lead(self) -> NewLead {
        self.extras.into_new_lead(
            Self::LEAD_TYPE,
            LeadContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
                property: self.property,
                property_size: self.property_size,
            },
        )
    }
}

/// `POST /leads/roi`, sent from the ROI calculator.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRoiLead {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be 1..=200 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address"),
        length(max = 255)
    )]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "phone must be at most 64 characters"))]
    pub phone: Option<String>,
    #[validate(
        required(message = "property is required"),
        length(min = 1, max = 255, message = "property must be 1..=255 characters")
    )]
    pub property: Option<String>,
    #[validate(
        required(message = "propertySize is required"),
        length(min = 1, max = 255, message = "propertySize must be 1..=255 characters")
    )]
    pub property_size: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub extras: LeadExtras,
}

impl LeadForm for NewRoiLead {
    const LEAD_TYPE: LeadType = LeadType::Roi;

    fn into_new_lead(self) -> NewLead {
        self.extras.into_new_lead(
            Self::LEAD_TYPE,
            LeadContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
                property: self.property,
                property_size: self.property_size,
            },
        )
    }
}

/// `POST /leads/consultation`; a callback request, so phone instead of email.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewConsultationLead {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be 1..=200 characters")
    )]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid address"), length(max = 255))]
    pub email: Option<String>,
    #[validate(
        required(message = "phone is required"),
        length(min = 5, max = 64, message = "phone must be 5..=64 characters")
    )]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub property: Option<String>,
    #[validate(length(max = 255))]
    pub property_size: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub extras: LeadExtras,
}

impl LeadForm for NewConsultationLead {
    const LEAD_TYPE: LeadType = LeadType::Consultation;

    fn into_new_lead(self) -> NewLead {
        self.extras.into_new_lead(
            Self::LEAD_TYPE,
            LeadContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
                property: self.property,
                property_size: self.property_size,
            },
        )
    }
}

/// `POST /leads/integration`, sent by PMS/channel-manager partners.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewIntegrationLead {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 200, message = "name must be 1..=200 characters")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email must be a valid address"),
        length(max = 255)
    )]
    pub email: Option<String>,
    #[validate(length(max = 64, message = "phone must be at most 64 characters"))]
    pub phone: Option<String>,
    #[validate(
        required(message = "property is required"),
        length(min = 1, max = 255, message = "property must be 1..=255 characters")
    )]
    pub property: Option<String>,
    #[validate(length(max = 255))]
    pub property_size: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub extras: LeadExtras,
}

impl LeadForm for NewIntegrationLead {
    const LEAD_TYPE: LeadType = LeadType::Integration;

    fn into_new_lead(self) -> NewLead {
        self.extras.into_new_lead(
            Self::LEAD_TYPE,
            LeadContact {
                name: self.name,
                email: self.email,
                phone: self.phone,
                property: self.property,
                property_size: self.property_size,
            },
        )
    }
}
