//! Worker thread for the remote report call.
//!
//! The call blocks on network I/O for up to the client timeout, so it runs
//! off the UI thread and reports back over a channel.

use pd_app::{report_service, GeneratedReport, PumpSpec, ReportPhase, ReportRequest, SizingResult};
use std::sync::mpsc::{channel, Receiver};
use std::thread::{self, JoinHandle};

pub struct ReportWorker {
    pub message_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Phase { label: &'static str },
    Complete { report: GeneratedReport },
    Error { message: String },
}

impl ReportWorker {
    pub fn start(credential: String, spec: PumpSpec, sizing: SizingResult) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let request = ReportRequest {
                credential: &credential,
                spec: &spec,
                sizing: &sizing,
            };
            let phase_tx = tx.clone();
            let result = report_service::generate_report(
                &request,
                Some(&mut |phase: ReportPhase| {
                    let _ = phase_tx.send(WorkerMessage::Phase {
                        label: phase.label(),
                    });
                }),
            );

            let _ = match result {
                Ok(report) => tx.send(WorkerMessage::Complete { report }),
                Err(e) => tx.send(WorkerMessage::Error {
                    message: e.to_string(),
                }),
            };
        });

        Self {
            message_rx: rx,
            _handle: handle,
        }
    }
}
