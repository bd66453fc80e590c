// SPDX-License-Identifier: MIT
// Copyright (c) 2010-2026 ITER Organization

//! `RemoteDomainRunner`: a [`DomainRunner`] that drives a job living in
//! another process, over the length-prefixed framing `oac-wire` defines
//!.
//!
//! A dedicated OS thread owns a single-threaded tokio runtime and the
//! transport connection; synchronous `DomainRunner` calls hand a command
//! across an unbounded channel and block on a one-shot reply channel for
//! the matching acknowledgement, mirroring the blocking-call contract the
//! local runner gets for free from running in-process.

use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use oac_core::{InstructionIndex, JobState};
use oac_engine::{
    ActiveInstructionFilter, EventDispatcher, JobInfo, JobObserver, JobService, UserChoiceDialog,
    UserValueDialog, WakeFn,
};
use oac_wire::{ProtocolError, RemoteCommand, RemoteEvent};
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::contracts::DomainRunner;

/// The transport a `RemoteDomainRunner` speaks over: one `RemoteCommand`
/// out, one `RemoteEvent` in, at a time. `async-trait` keeps this object
/// safe so the background thread can hold a `Box<dyn RemoteJobManagerClient>`
/// regardless of concrete transport.
#[async_trait]
pub trait RemoteJobManagerClient: Send {
    async fn send(&mut self, command: RemoteCommand) -> Result<(), ProtocolError>;
    async fn recv(&mut self) -> Result<RemoteEvent, ProtocolError>;
}

/// A [`RemoteJobManagerClient`] over a WebSocket, grounded in the same
/// `tokio-tungstenite` stack used for live-data streaming clients
/// elsewhere in this tree. Payloads are JSON, one per WebSocket message —
/// the 4-byte length prefix `oac-wire`'s framing adds for stream
/// transports is redundant here since WebSocket already frames messages.
pub struct WebSocketJobManagerClient {
    socket: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WebSocketJobManagerClient {
    pub fn new(socket: WebSocketStream<MaybeTlsStream<TcpStream>>) -> Self {
        Self { socket }
    }
}

#[async_trait]
impl RemoteJobManagerClient for WebSocketJobManagerClient {
    async fn send(&mut self, command: RemoteCommand) -> Result<(), ProtocolError> {
        let bytes = oac_wire::encode(&command)?;
        self.socket.send(Message::Binary(bytes)).await.map_err(|_| ProtocolError::ConnectionClosed)
    }

    async fn recv(&mut self) -> Result<RemoteEvent, ProtocolError> {
        loop {
            match self.socket.next().await {
                Some(Ok(Message::Binary(bytes))) => return oac_wire::decode(&bytes),
                Some(Ok(Message::Text(text))) => return oac_wire::decode(text.as_bytes()),
                Some(Ok(_)) => continue,
                Some(Err(_)) | None => return Err(ProtocolError::ConnectionClosed),
            }
        }
    }
}

/// Failure connecting a [`WebSocketJobManagerClient`]; distinct from
/// [`ProtocolError`] since it can also fail below the framing layer (TLS
/// handshake, DNS, the WebSocket upgrade itself).
#[derive(Debug, thiserror::Error)]
pub enum RemoteConnectError {
    #[error("websocket connect failed: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

type PendingReply = std::sync::mpsc::Sender<RemoteEvent>;

/// A [`DomainRunner`] proxying every call to a remote job manager over a
/// [`RemoteJobManagerClient`]. One instance per remote job.
pub struct RemoteDomainRunner {
    service: Arc<JobService>,
    command_tx: mpsc::UnboundedSender<(RemoteCommand, PendingReply)>,
    value_dialog: Arc<Mutex<Option<UserValueDialog>>>,
    choice_dialog: Arc<Mutex<Option<UserChoiceDialog>>>,
    job_index: u32,
    thread: Option<JoinHandle<()>>,
}

impl RemoteDomainRunner {
    /// Connects to `url` and spawns the background thread that owns the
    /// connection for the lifetime of the returned runner.
    pub fn connect_websocket(
        url: &str,
        job_index: u32,
        wake: Option<WakeFn>,
    ) -> Result<Self, RemoteConnectError> {
        let connect_runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let (socket, _response) = connect_runtime.block_on(tokio_tungstenite::connect_async(url))?;
        drop(connect_runtime);
        Self::new_with_client(WebSocketJobManagerClient::new(socket), job_index, wake)
            .map_err(RemoteConnectError::Io)
    }

    /// Spawns the background thread driving an already-connected client.
    /// Exposed directly so tests (and alternative transports) can supply
    /// a client without going through [`Self::connect_websocket`].
    pub fn new_with_client<C>(client: C, job_index: u32, wake: Option<WakeFn>) -> std::io::Result<Self>
    where
        C: RemoteJobManagerClient + 'static,
    {
        let service = Arc::new(JobService::new(wake));
        let observer = service.job_info_io();
        let value_dialog = Arc::new(Mutex::new(None));
        let choice_dialog = Arc::new(Mutex::new(None));
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let loop_observer = observer;
        let loop_value_dialog = value_dialog.clone();
        let loop_choice_dialog = choice_dialog.clone();
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let thread = std::thread::spawn(move || {
            runtime.block_on(run_loop(
                Box::new(client),
                command_rx,
                loop_observer,
                loop_value_dialog,
                loop_choice_dialog,
                job_index,
            ));
        });

        Ok(Self { service, command_tx, value_dialog, choice_dialog, job_index, thread: Some(thread) })
    }

    fn send_and_wait(&self, command: RemoteCommand) -> Option<RemoteEvent> {
        let (reply_tx, reply_rx) = std::sync::mpsc::channel();
        self.command_tx.send((command, reply_tx)).ok()?;
        reply_rx.recv_timeout(oac_wire::DEFAULT_TIMEOUT).ok()
    }

    fn send_and_ack(&self, command: RemoteCommand) -> bool {
        matches!(self.send_and_wait(command), Some(RemoteEvent::CommandAck { accepted: true }))
    }
}

impl Drop for RemoteDomainRunner {
    fn drop(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn run_loop(
    mut client: Box<dyn RemoteJobManagerClient>,
    mut command_rx: mpsc::UnboundedReceiver<(RemoteCommand, PendingReply)>,
    observer: Arc<JobObserver>,
    value_dialog: Arc<Mutex<Option<UserValueDialog>>>,
    choice_dialog: Arc<Mutex<Option<UserChoiceDialog>>>,
    job_index: u32,
) {
    let mut pending: VecDeque<PendingReply> = VecDeque::new();

    loop {
        tokio::select! {
            command = command_rx.recv() => {
                let Some((command, reply_tx)) = command else { return };
                if client.send(command).await.is_err() {
                    return;
                }
                pending.push_back(reply_tx);
            }
            event = client.recv() => {
                let Ok(event) = event else { return };
                match event {
                    RemoteEvent::Domain { event } => observer.replay_remote_event(event),
                    RemoteEvent::UserValueRequested { request_id, description, current } => {
                        let (value, processed) = {
                            let dialog = value_dialog.lock();
                            match dialog.as_ref() {
                                Some(dialog) => (dialog(request_id, &description, &current), true),
                                None => (current, false),
                            }
                        };
                        let answer = RemoteCommand::AnswerUserValue { job_index, request_id, value, processed };
                        if client.send(answer).await.is_err() {
                            return;
                        }
                    }
                    RemoteEvent::UserChoiceRequested { request_id, options, metadata } => {
                        let index = {
                            let dialog = choice_dialog.lock();
                            match dialog.as_ref() {
                                Some(dialog) => dialog(request_id, &options, &metadata),
                                None => -1,
                            }
                        };
                        let answer = RemoteCommand::AnswerUserChoice { job_index, request_id, index };
                        if client.send(answer).await.is_err() {
                            return;
                        }
                    }
                    other => {
                        if let Some(reply_tx) = pending.pop_front() {
                            let _ = reply_tx.send(other);
                        }
                    }
                }
            }
        }
    }
}

impl DomainRunner for RemoteDomainRunner {
    fn start(&self) -> bool {
        self.send_and_ack(RemoteCommand::Start { job_index: self.job_index })
    }

    fn stop(&self) -> bool {
        self.send_and_ack(RemoteCommand::Halt { job_index: self.job_index })
    }

    fn pause(&self) -> bool {
        self.send_and_ack(RemoteCommand::Pause { job_index: self.job_index })
    }

    fn step(&self) -> bool {
        self.send_and_ack(RemoteCommand::Step { job_index: self.job_index })
    }

    fn reset(&self) -> bool {
        self.send_and_ack(RemoteCommand::Reset { job_index: self.job_index })
    }

    fn set_breakpoint(&self, index: InstructionIndex) -> bool {
        self.send_and_ack(RemoteCommand::SetBreakpoint { job_index: self.job_index, index })
    }

    fn remove_breakpoint(&self, index: InstructionIndex) -> bool {
        self.send_and_ack(RemoteCommand::RemoveBreakpoint { job_index: self.job_index, index })
    }

    fn job_info_io(&self) -> Arc<JobObserver> {
        self.service.job_info_io()
    }

    fn job_state(&self) -> JobState {
        self.service.job_state()
    }

    fn wait_for_finished(&self) {
        self.service.wait_for_finished();
    }

    fn wait_for_state(&self, state: JobState, timeout: Duration) -> bool {
        self.service.wait_for_state(state, timeout)
    }

    fn set_tick_timeout(&self, timeout: Duration) {
        self.service.set_tick_timeout(timeout);
    }

    fn event_count(&self) -> usize {
        self.service.event_count()
    }

    fn job_info(&self) -> JobInfo {
        match self.send_and_wait(RemoteCommand::GetJobInfo { job_index: self.job_index }) {
            Some(RemoteEvent::JobInfo { snapshot }) => JobInfo {
                instruction_count: snapshot.instruction_count,
                instruction_types: snapshot.instruction_types,
                variable_names: snapshot.variable_names,
                procedure_name: snapshot.procedure_name,
                // The remote side does not currently send its ancestor
                // graph across the wire (`JobInfoSnapshot` carries no
                // `parents`); an `AncestorsActiveFilter` is a local-runner
                // optimization only.
                parents: Vec::new(),
            },
            _ => JobInfo {
                instruction_count: 0,
                instruction_types: Vec::new(),
                variable_names: Vec::new(),
                procedure_name: String::new(),
                parents: Vec::new(),
            },
        }
    }

    fn dispatcher(&self) -> &Mutex<EventDispatcher> {
        self.service.dispatcher()
    }

    fn service_turn(&self) {
        self.service.service_turn();
    }

    fn set_user_value_dialog(&self, dialog: UserValueDialog) {
        *self.value_dialog.lock() = Some(dialog);
    }

    fn set_user_choice_dialog(&self, dialog: UserChoiceDialog) {
        *self.choice_dialog.lock() = Some(dialog);
    }

    fn set_instruction_active_filter(&self, filter: ActiveInstructionFilter) {
        self.service.set_instruction_active_filter(filter);
    }
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
