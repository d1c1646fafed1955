use crate::server::{
    data::{
        repository::{rename_legacy, DocumentRepository, Record},
        store::{Collection, Document},
    },
    model::appointment::Appointment,
};

impl Record for Appointment {
    const COLLECTION: Collection = Collection::Appointments;

    fn normalize(document: &mut Document) {
        rename_legacy(document, "date", "data");
        rename_legacy(document, "time", "hora");
    }
}

pub type AppointmentRepository<'a> = DocumentRepository<'a, Appointment>;
