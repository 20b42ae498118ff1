//! Fakes shared by the handler and command tests.

use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use boundary_store::PlotFile;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::PlotsConfig;
use crate::host::{BoxFuture, Host};
use crate::notify::{NotifyError, Notifier};
use crate::registry::PlotRegistry;
use crate::state::PluginState;

/// State backed by `dir/coordinates.json`, spawning on the current runtime.
pub fn test_state(dir: &Path, notifier: Option<Arc<dyn Notifier>>) -> PluginState {
    let config = PlotsConfig::default();
    let registry = PlotRegistry::load(PlotFile::new(dir.join(&config.plots.file))).unwrap();
    PluginState::new(Handle::current(), config, registry, notifier)
}

#[derive(Default)]
pub struct RecordingHost {
    pub messages: Mutex<Vec<(String, String)>>,
    pub broadcasts: Mutex<Vec<String>>,
    pub tools: Mutex<Vec<(String, String)>>,
}

impl RecordingHost {
    pub fn messages_to(&self, player: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == player)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn broadcasts(&self) -> Vec<String> {
        self.broadcasts.lock().unwrap().clone()
    }
}

impl Host for RecordingHost {
    fn send_message<'a>(&'a self, player: &'a str, text: String) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.messages.lock().unwrap().push((player.to_owned(), text));
        })
    }

    fn broadcast(&self, text: String) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.broadcasts.lock().unwrap().push(text);
        })
    }

    fn give_tool<'a>(&'a self, player: &'a str, label: &'a str) -> BoxFuture<'a, ()> {
        Box::pin(async move {
            self.tools
                .lock()
                .unwrap()
                .push((player.to_owned(), label.to_owned()));
        })
    }
}

/// Forwards every notification into a channel.
pub struct ChannelNotifier(pub mpsc::UnboundedSender<String>);

impl ChannelNotifier {
    pub fn pair() -> (Arc<dyn Notifier>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self(tx)), rx)
    }
}

impl Notifier for ChannelNotifier {
    fn send<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            self.0
                .send(text.to_owned())
                .map_err(|e| NotifyError::Transport(e.to_string()))
        })
    }
}

/// Rejects every notification, counting the attempts.
#[derive(Default)]
pub struct FailingNotifier(AtomicU32);

impl FailingNotifier {
    pub fn attempts(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}

impl Notifier for FailingNotifier {
    fn send<'a>(&'a self, _text: &'a str) -> BoxFuture<'a, Result<(), NotifyError>> {
        Box::pin(async move {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(NotifyError::Transport("offline".into()))
        })
    }
}

/// Next notification, or `None` if nothing arrives shortly.
pub async fn next_notification(rx: &mut mpsc::UnboundedReceiver<String>) -> Option<String> {
    tokio::time::timeout(Duration::from_millis(500), rx.recv())
        .await
        .ok()
        .flatten()
}
