use std::sync::{Arc, Mutex};

use parking_lot::RwLock;
use websearch_sql::registry::Extended;
use websearch_sql::{Error, Operation, OperationRegistry, Registry, Result};

/// Captures tracing output (debug and above) for tests.
#[allow(dead_code)]
pub struct TestTracing {
    buffer: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl TestTracing {
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.buffer.clone();
        let make_writer = move || TestWriter(writer.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(make_writer)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn output(&self) -> String {
        let buf = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buf).to_string()
    }
}

struct TestWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for TestWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// How a [`RecordingRegistry`] answers `extend`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendBehavior {
    Accept,
    /// Claims support, then refuses with `ExtensionUnsupported`.
    RefuseUnsupported,
    /// Another installer won the race for the first name.
    Conflict,
    /// Fails with an unrelated error.
    Break,
}

/// Fake registry that records every `extend` batch it receives.
#[allow(dead_code)]
#[derive(Debug)]
pub struct RecordingRegistry {
    inner: Registry,
    behavior: ExtendBehavior,
    calls: RwLock<Vec<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingRegistry {
    pub fn new(behavior: ExtendBehavior) -> Self {
        Self {
            inner: Registry::new("recording"),
            behavior,
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.read().clone()
    }
}

impl OperationRegistry for RecordingRegistry {
    fn name(&self) -> &str {
        "recording"
    }

    fn supports_extension(&self) -> bool {
        true
    }

    fn contains(&self, name: &str) -> bool {
        self.inner.contains(name)
    }

    fn get(&self, name: &str) -> Option<Operation> {
        self.inner.get(name)
    }

    fn extend(&self, ops: Vec<(String, Operation)>) -> Result<Extended> {
        self.calls
            .write()
            .push(ops.iter().map(|(name, _)| name.clone()).collect());
        match self.behavior {
            ExtendBehavior::Accept => self.inner.extend(ops),
            ExtendBehavior::RefuseUnsupported => Err(Error::ExtensionUnsupported {
                registry: "recording".into(),
            }),
            ExtendBehavior::Conflict => Err(Error::AlreadyRegistered {
                name: ops[0].0.clone(),
            }),
            ExtendBehavior::Break => Err(Error::InvalidArgument {
                operation: "extend".into(),
                reason: "registry is poisoned".into(),
            }),
        }
    }
}
