//! Report aggregation over appointments and transactions.
//!
//! Appointment reports filter by status or by date period and enrich each appointment
//! with client and procedure names. The financial report sums transaction amounts into
//! revenue and expense totals.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::server::{
    data::{
        appointment::AppointmentRepository, client::ClientRepository,
        procedure::ProcedureRepository, store::RecordStore, transaction::TransactionRepository,
    },
    error::AppError,
    model::{
        appointment::{Appointment, AppointmentStatus},
        report::{AppointmentReport, FinancialTotals},
        transaction::TransactionKind,
    },
    util::period::{self, FinancialPeriod, Period},
};

pub struct ReportService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> ReportService<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Appointments with the given status, enriched with names.
    ///
    /// # Arguments
    /// - `status` - `pendente`, `confirmado` or `cancelado`, in any case
    ///
    /// # Returns
    /// - `Ok(Vec<AppointmentReport>)` - Matching appointments in storage order
    /// - `Err(AppError::BadRequest)` - Unknown status
    pub async fn by_status(&self, status: &str) -> Result<Vec<AppointmentReport>, AppError> {
        let status = AppointmentStatus::parse(status).ok_or_else(|| {
            AppError::BadRequest(
                "Invalid appointment status; use \"pendente\", \"confirmado\" or \"cancelado\""
                    .to_string(),
            )
        })?;

        let appointments = AppointmentRepository::new(self.store).get_all().await?;
        let selected = appointments
            .into_iter()
            .filter(|appointment| appointment.status == status)
            .collect();

        self.enrich(selected).await
    }

    /// Appointments falling in the same day, Sunday-started week or month as `reference`.
    ///
    /// Appointments whose date cannot be parsed are skipped with a warning.
    ///
    /// # Arguments
    /// - `period` - `dia`, `semana` or `mes`, in any case
    /// - `reference` - Reference date; required
    ///
    /// # Returns
    /// - `Ok(Vec<AppointmentReport>)` - Matching appointments in storage order
    /// - `Err(AppError::BadRequest)` - Unknown period, or missing or unparseable reference date
    pub async fn by_period(
        &self,
        period: &str,
        reference: Option<&str>,
    ) -> Result<Vec<AppointmentReport>, AppError> {
        let period = Period::from_report_param(period).ok_or_else(|| {
            AppError::BadRequest(
                "Invalid period; use \"dia\", \"semana\" or \"mes\"".to_string(),
            )
        })?;

        let reference = reference
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                AppError::BadRequest(
                    "A reference date (\"date\" parameter) is required for this report"
                        .to_string(),
                )
            })?;
        let reference = period::parse_date(reference)
            .ok_or_else(|| AppError::BadRequest("Invalid reference date".to_string()))?;

        let appointments = AppointmentRepository::new(self.store).get_all().await?;
        let selected = appointments
            .into_iter()
            .filter(|appointment| match period::parse_date(&appointment.data) {
                Some(date) => period.contains(date, reference),
                None => {
                    tracing::warn!(
                        "Skipping appointment {} with unreadable date '{}'",
                        appointment.id,
                        appointment.data
                    );
                    false
                }
            })
            .collect();

        self.enrich(selected).await
    }

    /// Revenue and expense totals for the period containing `today`.
    ///
    /// # Arguments
    /// - `period` - `day`, `week`, `month` or `total`; `None` means `total`
    /// - `today` - Reference date for the period
    ///
    /// # Returns
    /// - `Ok(FinancialTotals)` - Summed amounts
    /// - `Err(AppError::BadRequest)` - Unknown period
    pub async fn financial_totals(
        &self,
        period: Option<&str>,
        today: NaiveDate,
    ) -> Result<FinancialTotals, AppError> {
        let period = FinancialPeriod::from_param(period).ok_or_else(|| {
            AppError::BadRequest(
                "Invalid period; use \"day\", \"week\", \"month\" or \"total\"".to_string(),
            )
        })?;

        let transactions = TransactionRepository::new(self.store).get_all().await?;

        Ok(transactions
            .iter()
            .filter(|transaction| period.includes(&transaction.data, today))
            .fold(FinancialTotals::default(), |mut totals, transaction| {
                match transaction.tipo {
                    TransactionKind::Receita => totals.receitas += transaction.valor,
                    TransactionKind::Despesa => totals.despesas += transaction.valor,
                }
                totals
            }))
    }

    async fn enrich(
        &self,
        appointments: Vec<Appointment>,
    ) -> Result<Vec<AppointmentReport>, AppError> {
        let client_names: HashMap<String, String> = ClientRepository::new(self.store)
            .get_all()
            .await?
            .into_iter()
            .map(|client| (client.id, client.name))
            .collect();

        let procedure_names: HashMap<String, String> = ProcedureRepository::new(self.store)
            .get_all()
            .await?
            .into_iter()
            .map(|procedure| (procedure.id, procedure.nome))
            .collect();

        Ok(appointments
            .into_iter()
            .map(|appointment| {
                AppointmentReport::enrich(appointment, &client_names, &procedure_names)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::data::store::{Collection, MemoryStore};
    use serde_json::json;
    use test_utils::fixture;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn agenda() -> MemoryStore {
        MemoryStore::new()
            .with(
                Collection::Clients,
                [fixture::client::document("1", "Ana", "11999998888")],
            )
            .with(
                Collection::Procedures,
                [fixture::procedure::document("1", "Corte", 50.0)],
            )
            .with(
                Collection::Appointments,
                [
                    fixture::appointment::entity_builder("1", "1")
                        .date("2025-05-18")
                        .build(),
                    fixture::appointment::entity_builder("2", "1")
                        .date("2025-05-21T22:00:00Z")
                        .status("confirmado")
                        .build(),
                    fixture::appointment::entity_builder("3", "404")
                        .date("2025-05-21")
                        .status("Cancelado")
                        .build(),
                    fixture::appointment::entity_builder("4", "1")
                        .date("2025-05-25")
                        .build(),
                    fixture::appointment::entity_builder("5", "1")
                        .date("not a date")
                        .build(),
                    fixture::appointment::entity_builder("6", "1")
                        .date("2025-06-02")
                        .build(),
                ],
            )
    }

    fn ids(reports: &[AppointmentReport]) -> Vec<&str> {
        reports.iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn filters_by_status_ignoring_case() {
        let store = agenda();
        let service = ReportService::new(&store);

        let cancelled = service.by_status("CANCELADO").await.unwrap();

        assert_eq!(ids(&cancelled), vec!["3"]);
        assert_eq!(cancelled[0].client_name, "Cliente Desconhecido");
        assert_eq!(cancelled[0].data, "21/05/2025");
    }

    #[tokio::test]
    async fn rejects_unknown_status() {
        let store = agenda();
        let service = ReportService::new(&store);

        let result = service.by_status("agendado").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn day_matches_regardless_of_time() {
        let store = agenda();
        let service = ReportService::new(&store);

        let reports = service.by_period("dia", Some("2025-05-21")).await.unwrap();

        assert_eq!(ids(&reports), vec!["2", "3"]);
        assert_eq!(reports[0].client_name, "Ana");
        assert_eq!(reports[0].procedimentos[0].nome, "Corte");
    }

    #[tokio::test]
    async fn week_is_sunday_to_saturday() {
        let store = agenda();
        let service = ReportService::new(&store);

        let from_sunday = service.by_period("semana", Some("2025-05-18")).await.unwrap();
        let from_saturday = service.by_period("Semana", Some("2025-05-24")).await.unwrap();

        assert_eq!(ids(&from_sunday), vec!["1", "2", "3"]);
        assert_eq!(ids(&from_sunday), ids(&from_saturday));
    }

    #[tokio::test]
    async fn month_compares_year_and_month() {
        let store = agenda();
        let service = ReportService::new(&store);

        let reports = service.by_period("mes", Some("2025-05-01")).await.unwrap();

        assert_eq!(ids(&reports), vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn period_requires_valid_reference_date() {
        let store = agenda();
        let service = ReportService::new(&store);

        let missing = service.by_period("dia", None).await;
        let invalid = service.by_period("dia", Some("ontem")).await;
        let bad_period = service.by_period("ano", Some("2025-05-21")).await;

        assert!(matches!(missing, Err(AppError::BadRequest(_))));
        assert!(matches!(invalid, Err(AppError::BadRequest(msg)) if msg == "Invalid reference date"));
        assert!(matches!(bad_period, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn totals_over_all_transactions() {
        let store = MemoryStore::new().with(
            Collection::Transactions,
            [
                fixture::transaction::document("1", "receita", 100.0, "2025-05-21"),
                fixture::transaction::document("2", "despesa", 40.0, "2024-01-01"),
            ],
        );
        let service = ReportService::new(&store);

        let totals = service
            .financial_totals(Some("total"), date("2025-05-21"))
            .await
            .unwrap()
            .into_dto();

        assert_eq!(totals.receitas, "100.00");
        assert_eq!(totals.despesas, "40.00");
    }

    #[tokio::test]
    async fn totals_filter_by_period_and_skip_bad_dates() {
        let store = MemoryStore::new().with(
            Collection::Transactions,
            [
                fixture::transaction::document("1", "receita", 100.0, "2025-05-21"),
                fixture::transaction::document("2", "receita", 25.5, "2025-05-19"),
                fixture::transaction::document("3", "despesa", 40.0, "2025-04-30"),
                json!({ "id": "4", "tipo": "despesa", "valor": "12", "data": "sem data" }),
            ],
        );
        let service = ReportService::new(&store);
        let today = date("2025-05-21");

        let day = service.financial_totals(Some("day"), today).await.unwrap();
        let week = service.financial_totals(Some("week"), today).await.unwrap();
        let month = service.financial_totals(Some("month"), today).await.unwrap();
        let total = service.financial_totals(None, today).await.unwrap();

        assert_eq!(day.receitas, 100.0);
        assert_eq!(week.receitas, 125.5);
        assert_eq!(month.despesas, 0.0);
        assert_eq!(total.despesas, 52.0);
    }

    #[tokio::test]
    async fn rejects_unknown_financial_period() {
        let store = MemoryStore::new();
        let service = ReportService::new(&store);

        let result = service
            .financial_totals(Some("year"), date("2025-05-21"))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
