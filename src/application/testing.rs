//! In-memory fakes shared by the application unit tests.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::ports::{
    DecodeError, DeserializerFactory, EndpointPrompter, HostShell, MessageDeserializer, Properties,
    PropertiesRepository, StoreError,
};
use crate::domain::value_objects::{ClientConfig, ClusterId, RegistryEndpoint};

pub struct MemoryRepository {
    path: PathBuf,
    initial: Properties,
    saved: Mutex<Option<Properties>>,
    fail_saves: bool,
}

impl MemoryRepository {
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        Self {
            path: PathBuf::from("/memory/endpoints.properties"),
            initial: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            saved: Mutex::new(None),
            fail_saves: false,
        }
    }

    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::with_entries(&[])
        }
    }

    pub fn saved(&self) -> Option<Properties> {
        self.saved.lock().clone()
    }
}

impl PropertiesRepository for MemoryRepository {
    fn load(&self) -> Result<Properties, StoreError> {
        Ok(self.initial.clone())
    }

    fn save(&self, properties: &Properties) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::AccessError {
                path: self.path.clone(),
                message: "read-only".to_string(),
            });
        }
        *self.saved.lock() = Some(properties.clone());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Default)]
pub struct RecordingShell {
    errors: Mutex<Vec<(String, String)>>,
    settings: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingShell {
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().clone()
    }

    pub fn settings_entries(&self) -> Vec<(String, PathBuf)> {
        self.settings.lock().clone()
    }
}

impl HostShell for RecordingShell {
    fn notify_error(&self, title: &str, message: &str) {
        self.errors
            .lock()
            .push((title.to_string(), message.to_string()));
    }

    fn install_settings_entry(&self, caption: &str, properties_path: &Path) {
        self.settings
            .lock()
            .push((caption.to_string(), properties_path.to_path_buf()));
    }
}

/// Answers prompts from a fixed script and counts the calls.
pub struct ScriptedPrompter {
    answers: Mutex<Vec<Option<String>>>,
    calls: AtomicUsize,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: Mutex::new(
                answers
                    .iter()
                    .rev()
                    .map(|a| a.map(str::to_string))
                    .collect(),
            ),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EndpointPrompter for ScriptedPrompter {
    fn prompt_endpoint(&self, _cluster: &ClusterId) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers.lock().pop().flatten()
    }
}

/// Prompter that blocks until the test releases it.
pub struct GatedPrompter {
    entered: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<Option<String>>>,
}

impl GatedPrompter {
    /// Returns the prompter, a receiver signalled when a prompt opens, and a
    /// sender that answers it.
    pub fn new() -> (Self, mpsc::Receiver<()>, mpsc::Sender<Option<String>>) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        (
            Self {
                entered: Mutex::new(entered_tx),
                release: Mutex::new(release_rx),
            },
            entered_rx,
            release_tx,
        )
    }
}

impl EndpointPrompter for GatedPrompter {
    fn prompt_endpoint(&self, _cluster: &ClusterId) -> Option<String> {
        let _ = self.entered.lock().send(());
        self.release.lock().recv().ok().flatten()
    }
}

/// Deserializer that returns the payload as a UTF-8 string inside an object.
pub struct EchoDeserializer {
    pub endpoint: RegistryEndpoint,
}

impl MessageDeserializer for EchoDeserializer {
    fn deserialize(&self, topic: &str, payload: &[u8]) -> Result<serde_json::Value, DecodeError> {
        match payload {
            b"boom" => panic!("decoder exploded"),
            b"bad" => Err(DecodeError::Deserialize {
                topic: topic.to_string(),
                message: "unknown magic byte".to_string(),
            }),
            _ => Ok(serde_json::json!({
                "endpoint": self.endpoint.as_str(),
                "value": String::from_utf8_lossy(payload),
            })),
        }
    }
}

/// Factory counting how many clients it builds.
#[derive(Default)]
pub struct CountingFactory {
    created: AtomicUsize,
    configs: Mutex<Vec<(RegistryEndpoint, ClientConfig)>>,
}

impl CountingFactory {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn configs(&self) -> Vec<(RegistryEndpoint, ClientConfig)> {
        self.configs.lock().clone()
    }
}

impl DeserializerFactory for CountingFactory {
    fn create(
        &self,
        endpoint: &RegistryEndpoint,
        config: &ClientConfig,
    ) -> Result<Arc<dyn MessageDeserializer>, DecodeError> {
        if endpoint.as_str().starts_with("broken") {
            return Err(DecodeError::Client {
                endpoint: endpoint.to_string(),
                message: "connection refused".to_string(),
            });
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        self.configs.lock().push((endpoint.clone(), config.clone()));
        Ok(Arc::new(EchoDeserializer {
            endpoint: endpoint.clone(),
        }))
    }
}
