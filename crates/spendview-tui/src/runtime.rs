//! The event loop: draw a frame, wait for the next terminal event or
//! resolved backend request, feed it through the session, spawn tasks for
//! whatever effects come back.

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use spendview_core::session::{BackendEvent, Effect, Intent};
use spendview_core::BackendClient;

use crate::input::{handle_key, handle_mouse};
use crate::render::render;
use crate::ui::{App, Tui};

/// Everything the select loop can be woken by besides the terminal.
enum RuntimeEvent {
    Backend(BackendEvent),
    FileRead {
        name: String,
        outcome: std::io::Result<Vec<u8>>,
    },
}

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App, client: BackendClient) -> Result<()> {
    let mut event_stream = EventStream::new();
    let (tx, mut rx) = mpsc::channel::<RuntimeEvent>(32);

    while app.running {
        drain_intents(app, &client, &tx);
        read_pending_file(app, &tx);

        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                let Some(event) = maybe_event else { break };
                match event? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.status = None;
                        handle_key(app, key);
                    }
                    Event::Mouse(mouse) => handle_mouse(app, mouse),
                    _ => {}
                }
            }

            Some(event) = rx.recv() => match event {
                RuntimeEvent::Backend(backend) => {
                    app.session.absorb(backend);
                    // Uploads can shrink or empty the table.
                    app.clamp_selection();
                }
                RuntimeEvent::FileRead { name, outcome } => match outcome {
                    Ok(bytes) => {
                        app.session.set_file_name(&name);
                        app.queue(Intent::Upload { file_name: name, bytes });
                    }
                    Err(err) => {
                        warn!(file = %name, error = %err, "file read failed");
                        app.set_status(format!("Could not read {name}: {err}"));
                    }
                },
            },
        }
    }
    Ok(())
}

/// Run queued intents through the session and spawn a task per effect. Each
/// task resolves to exactly one `BackendEvent`; the session decides on
/// receipt whether the reply is still live.
fn drain_intents(app: &mut App, client: &BackendClient, tx: &mpsc::Sender<RuntimeEvent>) {
    let intents: Vec<Intent> = app.pending_intents.drain(..).collect();
    for intent in intents {
        if let Some(effect) = app.session.apply(intent) {
            spawn_effect(effect, client.clone(), tx.clone());
        }
    }
}

fn spawn_effect(effect: Effect, client: BackendClient, tx: mpsc::Sender<RuntimeEvent>) {
    tokio::spawn(async move {
        let event = match effect {
            Effect::Upload { file_name, bytes, token } => {
                let outcome = client.upload(&file_name, bytes).await;
                BackendEvent::UploadFinished { token, outcome }
            }
            Effect::Chat { request, token } => {
                let outcome = client.chat(&request).await;
                BackendEvent::ChatReply { token, outcome }
            }
            Effect::Search { query, token } => {
                let outcome = client.search(&query).await;
                BackendEvent::SearchFinished { token, outcome }
            }
        };
        if tx.send(RuntimeEvent::Backend(event)).await.is_err() {
            debug!("runtime channel closed, dropping backend event");
        }
    });
}

/// Kick off an async read for a requested upload path.
fn read_pending_file(app: &mut App, tx: &mpsc::Sender<RuntimeEvent>) {
    let Some(path) = app.pending_file.take() else {
        return;
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = tokio::fs::read(&path).await;
        let _ = tx.send(RuntimeEvent::FileRead { name, outcome }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pending_file_is_read_off_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spend.xlsx");
        tokio::fs::write(&path, b"sheet bytes").await.unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        let mut app = App::new();
        app.pending_file = Some(path);

        read_pending_file(&mut app, &tx);
        assert!(app.pending_file.is_none(), "request consumed");

        let Some(RuntimeEvent::FileRead { name, outcome }) = rx.recv().await else {
            panic!("expected a file read event");
        };
        assert_eq!(name, "spend.xlsx");
        assert_eq!(outcome.unwrap(), b"sheet bytes".to_vec());
    }

    #[tokio::test]
    async fn missing_file_reports_the_error() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut app = App::new();
        app.pending_file = Some("/no/such/file.xlsx".into());

        read_pending_file(&mut app, &tx);
        let Some(RuntimeEvent::FileRead { outcome, .. }) = rx.recv().await else {
            panic!("expected a file read event");
        };
        assert!(outcome.is_err());
    }
}
