use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

// One accepted request, as handed to the audit writer
#[derive(Debug)]
pub struct AuditRecord {
    pub ip: String,
    pub time: DateTime<Utc>,
    pub body: Vec<u8>,
}

// One line per record in the audit log
pub fn format_line(record: &AuditRecord) -> String {
    format!(
        "IP:{} | Time:{} | Body:{}\n",
        record.ip,
        record.time.to_rfc3339(),
        String::from_utf8_lossy(&record.body)
    )
}

// Background writer - drains the audit queue and appends one line per
// record. A failed write is reported and the record dropped; the request
// it describes was already accepted.
pub async fn audit_writer(mut rx: mpsc::Receiver<AuditRecord>, path: PathBuf) {
    println!("Audit writer started - logging to {}", path.display());

    while let Some(record) = rx.recv().await {
        if let Err(e) = append_line(&path, &record).await {
            println!("Error writing log file: {}", e);
        }
    }
}

async fn append_line(path: &Path, record: &AuditRecord) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .await?;
    file.write_all(format_line(record).as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
