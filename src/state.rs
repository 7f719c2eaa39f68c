use tokio::sync::mpsc;

use crate::admission::AdmissionController;
use crate::audit::AuditRecord;

// app's shared state
pub struct AppState {
    pub admission: AdmissionController,
    pub audit_tx: mpsc::Sender<AuditRecord>, // queue feeding the audit writer
}
