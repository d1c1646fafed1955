//! Appointment CRUD and lifecycle.
//!
//! Confirm and cancel hold the appointments lock for their whole read-check-write
//! sequence. Two simultaneous confirmations of the same appointment therefore run one
//! after the other, and the second sees the first one's status. Confirm also holds the
//! transactions lock while it looks for and records the revenue transaction, the same
//! lock manual transaction writes take.

use crate::server::{
    data::{
        appointment::AppointmentRepository,
        client::ClientRepository,
        store::{Collection, RecordStore},
        transaction::TransactionRepository,
    },
    error::AppError,
    model::{
        appointment::{
            Appointment, AppointmentPatch, Confirmation, CreateAppointmentParams, StatusPatch,
        },
        transaction::CreateTransactionParams,
    },
    service::lock::WriteLocks,
};

fn not_found() -> AppError {
    AppError::NotFound("Appointment not found".to_string())
}

pub struct AppointmentService<'a> {
    store: &'a dyn RecordStore,
    locks: &'a WriteLocks,
}

impl<'a> AppointmentService<'a> {
    pub fn new(store: &'a dyn RecordStore, locks: &'a WriteLocks) -> Self {
        Self { store, locks }
    }

    /// Lists all appointments
    pub async fn get_all(&self) -> Result<Vec<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.store);

        Ok(repo.get_all().await?)
    }

    /// Gets an appointment by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.store);

        Ok(repo.get_by_id(id).await?)
    }

    /// Books a new appointment with status `pendente`
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.store);

        let appointment = repo.create(&params).await?;

        tracing::info!(
            "Created appointment {} for client {} on {} {}",
            appointment.id,
            appointment.client_id,
            appointment.data,
            appointment.hora
        );

        Ok(appointment)
    }

    /// Updates an appointment's details
    /// Returns None if the appointment doesn't exist
    pub async fn update(
        &self,
        id: &str,
        patch: AppointmentPatch,
    ) -> Result<Option<Appointment>, AppError> {
        let repo = AppointmentRepository::new(self.store);

        Ok(repo.update(id, &patch).await?)
    }

    /// Deletes an appointment. Transactions generated from it are kept.
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let repo = AppointmentRepository::new(self.store);

        Ok(repo.delete(id).await?)
    }

    /// Confirms a pending appointment and records its revenue.
    ///
    /// The status is persisted first. A revenue transaction is then created unless one
    /// with the same origin reference already exists.
    ///
    /// # Returns
    /// - `Ok(Confirmation)` - Confirmed appointment and the transaction created, if any
    /// - `Err(AppError::NotFound)` - Unknown appointment id
    /// - `Err(AppError::TransitionErr)` - Appointment already confirmed or cancelled
    pub async fn confirm(&self, id: &str) -> Result<Confirmation, AppError> {
        let _appointments_guard = self.locks.lock(Collection::Appointments).await;

        let appointments = AppointmentRepository::new(self.store);
        let transactions = TransactionRepository::new(self.store);
        let clients = ClientRepository::new(self.store);

        let appointment = appointments.get_by_id(id).await?.ok_or_else(not_found)?;
        let status = appointment.status.confirm()?;

        let appointment = appointments
            .update(id, &StatusPatch { status })
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Appointment {} vanished while confirming", id))
            })?;

        let _transactions_guard = self.locks.lock(Collection::Transactions).await;

        if transactions
            .find_revenue_for(&appointment.id, None)
            .await?
            .is_some()
        {
            tracing::info!(
                "Appointment {} confirmed; revenue transaction already exists",
                appointment.id
            );

            return Ok(Confirmation {
                appointment,
                transaction: None,
            });
        }

        let client_name = clients
            .get_by_id(&appointment.client_id)
            .await?
            .map(|client| client.name);

        let params = CreateTransactionParams::revenue_for(&appointment, client_name.as_deref());
        let transaction = transactions.create(&params).await?;

        tracing::info!(
            "Appointment {} confirmed; created revenue transaction {} of {:.2}",
            appointment.id,
            transaction.id,
            transaction.valor
        );

        Ok(Confirmation {
            appointment,
            transaction: Some(transaction),
        })
    }

    /// Cancels a pending appointment. Transactions are not touched.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Cancelled appointment
    /// - `Err(AppError::NotFound)` - Unknown appointment id
    /// - `Err(AppError::TransitionErr)` - Appointment already cancelled or confirmed
    pub async fn cancel(&self, id: &str) -> Result<Appointment, AppError> {
        let _guard = self.locks.lock(Collection::Appointments).await;

        let repo = AppointmentRepository::new(self.store);

        let appointment = repo.get_by_id(id).await?.ok_or_else(not_found)?;
        let status = appointment.status.cancel()?;

        let appointment = repo
            .update(id, &StatusPatch { status })
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Appointment {} vanished while cancelling", id))
            })?;

        tracing::info!("Appointment {} cancelled", appointment.id);

        Ok(appointment)
    }
}
