//! Services Controller
//!
//! Add-service dialog state and dispatch into the services container.

use tracing::info;

use crate::domain::{NewService, Service};
use crate::error::Result;
use crate::features::form::{coerce_int, required, unknown_field};
use crate::services::TableStore;
use crate::state::Slice;

/// "Add New Service" dialog
///
/// The numeric inputs are coerced as they are typed, so they always hold
/// a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub open: bool,
    pub name: String,
    pub progress: i32,
    pub forms_submitted: u32,
}

impl ServiceForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "name" => self.name = value.to_string(),
            "progress" => {
                self.progress = i32::try_from(coerce_int(value)).unwrap_or_default();
            }
            "formsSubmitted" | "forms_submitted" => {
                self.forms_submitted = u32::try_from(coerce_int(value)).unwrap_or_default();
            }
            other => return Err(unknown_field("service", other)),
        }
        Ok(())
    }

    pub fn to_draft(&self) -> Result<NewService> {
        Ok(NewService::new(
            required("name", &self.name)?,
            self.progress,
            self.forms_submitted,
        ))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Services section controller
pub struct ServicesController<S: TableStore> {
    services: Slice<Service, S>,
}

impl<S: TableStore> ServicesController<S> {
    pub fn new(services: Slice<Service, S>) -> Self {
        Self { services }
    }

    pub async fn submit(&self, form: &mut ServiceForm) -> Result<Service> {
        let draft = form.to_draft()?;
        let service = self.services.add(draft).await?;
        info!(id = %service.id, name = %service.name, "Service added from form");
        form.reset();
        Ok(service)
    }
}
