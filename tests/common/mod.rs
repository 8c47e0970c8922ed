#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]

use async_trait::async_trait;
use std::{
    io,
    sync::{Arc, Mutex},
};
use tenantctl::{
    error::Error,
    model::{
        CreateInstance, CreateInstanceBackup, DeleteInstance, GetInstanceBackups,
        GetOperationStatus, Instance, InstanceBackup, OperationStatus, RestoreInstanceBackup,
        ServiceVersion,
    },
    prompt::Confirmation,
    service::ManagementAgent,
};
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

/// Every request the routines sent, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetInstances(Option<String>),
    GetServiceVersions(Option<String>),
    CreateInstance(CreateInstance),
    DeleteInstance(DeleteInstance),
    GetOperationStatus(GetOperationStatus),
    GetInstanceBackups(GetInstanceBackups),
    CreateInstanceBackup(CreateInstanceBackup),
    RestoreInstanceBackup(RestoreInstanceBackup),
}

/// In-memory agent recording its calls
#[derive(Default)]
pub struct FakeAgent {
    pub instances: Vec<Instance>,
    pub versions: Vec<ServiceVersion>,
    pub backups: Vec<InstanceBackup>,
    pub statuses: Vec<OperationStatus>,
    /// Every call fails with a transport error
    pub unreachable: bool,
    /// Every call panics
    pub panics: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeAgent {
    pub fn new() -> Self {
        Self {
            statuses: vec![status("Succeeded")],
            ..Self::default()
        }
    }

    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }

    pub fn with_versions(mut self, versions: Vec<ServiceVersion>) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_backups(mut self, backups: Vec<InstanceBackup>) -> Self {
        self.backups = backups;
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn panicking(mut self) -> Self {
        self.panics = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matcher: fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matcher(c)).count()
    }

    fn record(&self, call: Call) -> Result<(), Error> {
        assert!(!self.panics, "agent exploded");
        self.calls.lock().unwrap().push(call);
        if self.unreachable {
            return Err(Error::Transport("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ManagementAgent for FakeAgent {
    async fn get_instances(&self, unique_name: Option<&str>) -> Result<Vec<Instance>, Error> {
        self.record(Call::GetInstances(unique_name.map(str::to_string)))?;
        Ok(self.instances.clone())
    }

    async fn get_service_versions(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<ServiceVersion>, Error> {
        self.record(Call::GetServiceVersions(name.map(str::to_string)))?;
        Ok(self.versions.clone())
    }

    async fn create_instance(
        &self,
        request: &CreateInstance,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.record(Call::CreateInstance(request.clone()))?;
        Ok(self.statuses.clone())
    }

    async fn delete_instance(
        &self,
        request: &DeleteInstance,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.record(Call::DeleteInstance(request.clone()))?;
        Ok(self.statuses.clone())
    }

    async fn get_operation_status(
        &self,
        request: &GetOperationStatus,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.record(Call::GetOperationStatus(request.clone()))?;
        Ok(self.statuses.clone())
    }

    async fn get_instance_backups(
        &self,
        request: &GetInstanceBackups,
    ) -> Result<Vec<InstanceBackup>, Error> {
        self.record(Call::GetInstanceBackups(request.clone()))?;
        Ok(self.backups.clone())
    }

    async fn create_instance_backup(
        &self,
        request: &CreateInstanceBackup,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.record(Call::CreateInstanceBackup(request.clone()))?;
        Ok(self.statuses.clone())
    }

    async fn restore_instance_backup(
        &self,
        request: &RestoreInstanceBackup,
    ) -> Result<Vec<OperationStatus>, Error> {
        self.record(Call::RestoreInstanceBackup(request.clone()))?;
        Ok(self.statuses.clone())
    }
}

/// Answers every question with the same text and counts the questions
pub struct ScriptedPrompt {
    answer: String,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Confirmation for ScriptedPrompt {
    fn ask(&self, question: &str) -> Result<String, Error> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self.answer.clone())
    }
}

/// Captures formatted log output for assertions
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines_containing(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }

    /// Route the events of the current thread into this buffer
    pub fn capture(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn instance(friendly_name: &str, unique_name: &str) -> Instance {
    Instance {
        id: Uuid::new_v4(),
        unique_name: unique_name.to_string(),
        friendly_name: friendly_name.to_string(),
        url: Some(format!("https://{unique_name}.crm6.dynamics.com")),
        state: Some("Ready".to_string()),
        version: Some("9.1.0.0".to_string()),
    }
}

pub fn version(name: &str) -> ServiceVersion {
    ServiceVersion {
        id: Uuid::new_v4(),
        name: name.to_string(),
        localized_name: None,
    }
}

pub fn status(state: &str) -> OperationStatus {
    OperationStatus {
        operation_id: Uuid::new_v4(),
        status: state.to_string(),
        operation_location: None,
        resource_location: None,
        errors: Vec::new(),
        information: Vec::new(),
    }
}
