//! Layout and environment doubles that count provisioning calls.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Layout, RuntimePaths};
use crate::ports::{LayoutStrategy, RuntimeEnvironment};

/// Fixed layout; counts `install` calls.
#[derive(Clone, Debug)]
pub struct RecordingLayout {
    layout: Layout,
    pub installs: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl RecordingLayout {
    pub fn new(prefix: &str) -> Self {
        Self { layout: Layout::under_prefix(prefix), installs: Arc::new(Mutex::new(0)) }
    }

    pub fn install_count(&self) -> usize {
        *self.installs.lock().unwrap()
    }
}

impl LayoutStrategy for RecordingLayout {
    fn layout(&self) -> Result<Layout, AppError> {
        Ok(self.layout.clone())
    }

    fn install(&self) -> Result<Vec<PathBuf>, AppError> {
        *self.installs.lock().unwrap() += 1;
        Ok(self.layout.required_dirs())
    }
}

/// Runtime at a fixed prefix; records the `update` flag of each install.
#[derive(Clone, Debug)]
pub struct RecordingEnvironment {
    prefix: PathBuf,
    pub calls: Arc<Mutex<Vec<bool>>>,
}

#[allow(dead_code)]
impl RecordingEnvironment {
    pub fn new(prefix: &str) -> Self {
        Self { prefix: PathBuf::from(prefix), calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Installs that were allowed to provision (`update == false`).
    pub fn provision_count(&self) -> usize {
        self.calls.lock().unwrap().iter().filter(|update| !**update).count()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl RuntimeEnvironment for RecordingEnvironment {
    fn paths(&self, _layout: &Layout) -> Result<RuntimePaths, AppError> {
        Ok(RuntimePaths::under_prefix(&self.prefix))
    }

    fn install(&self, _layout: &Layout, update: bool) -> Result<Vec<PathBuf>, AppError> {
        self.calls.lock().unwrap().push(update);
        if update {
            return Ok(Vec::new());
        }
        let runtime = RuntimePaths::under_prefix(&self.prefix);
        Ok(vec![runtime.bin, runtime.lib])
    }
}
