use axum::{
    routing::{get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{
            AppointmentDto, ConfirmationDto, CreateAppointmentDto, ProcedureSnapshotDto,
            UpdateAppointmentDto,
        },
        client::{ClientDto, ClientOptionDto, CreateClientDto, UpdateClientDto},
        procedure::{CreateProcedureDto, ProcedureDto},
        report::{AppointmentReportDto, FinancialReportDto},
        transaction::{CreateTransactionDto, TransactionDto, UpdateTransactionDto},
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::{appointment, auth, client, procedure, report, transaction},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        client::get_clients,
        client::get_client_by_id,
        client::create_client,
        client::update_client,
        client::delete_client,
        client::get_client_options,
        procedure::get_procedures,
        procedure::create_procedure,
        appointment::get_appointments,
        appointment::get_appointment_by_id,
        appointment::create_appointment,
        appointment::update_appointment,
        appointment::delete_appointment,
        appointment::confirm_appointment,
        appointment::cancel_appointment,
        transaction::get_transactions,
        transaction::get_transaction_by_id,
        transaction::create_transaction,
        transaction::update_transaction,
        transaction::delete_transaction,
        report::get_appointments_by_status,
        report::get_appointments_by_period,
        report::get_financial_report,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        UserDto,
        RegisterDto,
        LoginDto,
        ClientDto,
        CreateClientDto,
        UpdateClientDto,
        ClientOptionDto,
        ProcedureDto,
        CreateProcedureDto,
        ProcedureSnapshotDto,
        AppointmentDto,
        CreateAppointmentDto,
        UpdateAppointmentDto,
        ConfirmationDto,
        TransactionDto,
        CreateTransactionDto,
        UpdateTransactionDto,
        AppointmentReportDto,
        FinancialReportDto,
    )),
    tags(
        (name = "auth", description = "Account registration and credential checks"),
        (name = "client", description = "Salon clients"),
        (name = "procedure", description = "Procedure catalogue"),
        (name = "appointment", description = "Appointment booking and lifecycle"),
        (name = "transaction", description = "Revenue and expense ledger"),
        (name = "report", description = "Appointment and financial reports"),
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route(
            "/api/clients",
            get(client::get_clients).post(client::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(client::get_client_by_id)
                .put(client::update_client)
                .delete(client::delete_client),
        )
        .route("/api/clients-dropdown", get(client::get_client_options))
        .route(
            "/api/procedures",
            get(procedure::get_procedures).post(procedure::create_procedure),
        )
        .route(
            "/api/appointments",
            get(appointment::get_appointments).post(appointment::create_appointment),
        )
        .route(
            "/api/appointments/{id}",
            get(appointment::get_appointment_by_id)
                .put(appointment::update_appointment)
                .delete(appointment::delete_appointment),
        )
        .route(
            "/api/appointments/{id}/confirm",
            put(appointment::confirm_appointment),
        )
        .route(
            "/api/appointments/{id}/cancel",
            put(appointment::cancel_appointment),
        )
        .route(
            "/api/transactions",
            get(transaction::get_transactions).post(transaction::create_transaction),
        )
        .route(
            "/api/transactions/{id}",
            get(transaction::get_transaction_by_id)
                .put(transaction::update_transaction)
                .delete(transaction::delete_transaction),
        )
        .route(
            "/api/reports/status/{status}",
            get(report::get_appointments_by_status),
        )
        .route(
            "/api/reports/appointments/{period}",
            get(report::get_appointments_by_period),
        )
        .route("/api/reports/financial", get(report::get_financial_report))
        .route("/api/openapi.json", get(openapi))
}
