use crate::app::error::AppError;
use crate::auth::{AuthGate, CredentialVerifier, verifier_from_config};
use crate::download;
use crate::workflow::{StartOutcome, Workflow};
use dataflow_config::DataflowConfig;
use dataflow_model::download::DownloadArtifact;
use dataflow_model::format::DataFormat;
use dataflow_model::navigation::NavigationSection;
use dataflow_model::session::{AuthView, Credentials, RegistrationForm, Session};
use dataflow_model::upload::UploadCandidate;
use dataflow_model::workflow::WorkflowState;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

pub mod error;

/// What a front end should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login(AuthView),
    Upload(WorkflowState),
    Placeholder(NavigationSection),
}

/// Single owner of the session, the navigation and the workflow.
///
/// Everything past the login screen requires an authenticated session.
#[derive(Debug)]
pub struct App {
    gate: AuthGate,
    section: NavigationSection,
    workflow: Workflow,
}

impl App {
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>, tick_period: Duration) -> Self {
        Self {
            gate: AuthGate::new(verifier),
            section: NavigationSection::default(),
            workflow: Workflow::new(tick_period),
        }
    }

    #[must_use]
    pub fn from_config(config: &DataflowConfig) -> Self {
        Self::new(
            verifier_from_config(config.accounts()),
            config.conversion().tick_period(),
        )
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.gate.session()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated()
    }

    pub async fn attempt_login(&mut self, email: &str, password: &str) -> Result<(), AppError> {
        self.gate
            .attempt_login(&Credentials::new(email, password))
            .await
            .map_err(Into::into)
    }

    pub fn sign_in_with_provider(&mut self) {
        self.gate.sign_in_with_provider();
    }

    pub fn register(&self, form: &RegistrationForm) -> Result<(), AppError> {
        self.gate.register(form).map_err(Into::into)
    }

    pub fn show_register(&mut self) {
        self.gate.show_register();
    }

    pub fn show_sign_in(&mut self) {
        self.gate.show_sign_in();
    }

    #[must_use]
    pub fn section(&self) -> NavigationSection {
        self.section
    }

    pub fn set_section(&mut self, section: NavigationSection) -> Result<(), AppError> {
        self.ensure_authenticated()?;
        tracing::debug!(%section, "navigating");
        self.section = section;
        Ok(())
    }

    pub fn submit_file(&mut self, candidate: UploadCandidate) -> Result<(), AppError> {
        self.ensure_authenticated()?;
        self.workflow.submit_file(candidate)?;
        Ok(())
    }

    pub fn start_conversion(&mut self, target: Option<DataFormat>) -> Result<StartOutcome, AppError> {
        self.ensure_authenticated()?;
        Ok(self.workflow.start_conversion(target)?)
    }

    pub fn download(&self) -> Result<DownloadArtifact, AppError> {
        self.ensure_authenticated()?;
        Ok(download::emit(&self.workflow.state())?)
    }

    pub fn reset(&mut self) -> Result<(), AppError> {
        self.ensure_authenticated()?;
        self.workflow.reset();
        Ok(())
    }

    #[must_use]
    pub fn workflow_state(&self) -> WorkflowState {
        self.workflow.state()
    }

    #[must_use]
    pub fn available_targets(&self) -> &'static [DataFormat] {
        self.workflow.available_targets()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.workflow.subscribe()
    }

    pub async fn wait_for_completion(&self) -> Result<WorkflowState, AppError> {
        Ok(self.workflow.wait_for_completion().await?)
    }

    #[must_use]
    pub fn view(&self) -> View {
        if !self.is_authenticated() {
            return View::Login(self.gate.view());
        }
        match self.section {
            NavigationSection::Upload => View::Upload(self.workflow.state()),
            section => View::Placeholder(section),
        }
    }

    fn ensure_authenticated(&self) -> Result<(), AppError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::error::AuthError;
    use crate::download::{DownloadSink, MemorySink};
    use crate::upload::error::UploadError;
    use dataflow_model::workflow::ConversionPhase;
    use dataflow_test_helpers::{SAMPLE_CSV, candidate, csv_candidate};
    use test_log::test;

    fn app() -> App {
        App::from_config(&DataflowConfig::default())
    }

    async fn signed_in() -> App {
        let mut app = app();
        app.attempt_login("administrador@test.com", "test123").await.unwrap();
        app
    }

    #[test(tokio::test)]
    async fn test_gate_blocks_workflow() {
        let mut app = app();
        assert_eq!(app.view(), View::Login(AuthView::SignIn));
        assert!(matches!(
            app.submit_file(csv_candidate("report.csv")),
            Err(AppError::NotAuthenticated)
        ));
        assert!(matches!(
            app.set_section(NavigationSection::Files),
            Err(AppError::NotAuthenticated)
        ));
        assert!(matches!(app.download(), Err(AppError::NotAuthenticated)));
        assert!(matches!(app.reset(), Err(AppError::NotAuthenticated)));
        assert_eq!(app.workflow_state(), WorkflowState::default());
    }

    #[test(tokio::test)]
    async fn test_failed_login_keeps_session() {
        let mut app = app();
        let error = app.attempt_login("administrador@test.com", "wrong").await.unwrap_err();
        assert!(matches!(error, AppError::Auth(AuthError::InvalidCredentials)));
        assert_eq!(app.session(), Session::default());
        assert_eq!(error.to_string(), "Invalid email or password.");
    }

    #[test]
    fn test_register_view() {
        let mut app = app();
        app.show_register();
        assert_eq!(app.view(), View::Login(AuthView::Register));
        assert!(matches!(
            app.register(&RegistrationForm::default()),
            Err(AppError::Auth(AuthError::RegistrationUnimplemented))
        ));
        assert!(!app.is_authenticated());
    }

    #[test]
    fn test_provider_sign_in_reveals_upload() {
        let mut app = app();
        app.sign_in_with_provider();
        assert_eq!(app.section(), NavigationSection::Upload);
        assert_eq!(app.view(), View::Upload(WorkflowState::default()));
    }

    #[test(tokio::test)]
    async fn test_navigation() {
        let mut app = signed_in().await;
        app.set_section(NavigationSection::Dashboard).unwrap();
        assert_eq!(app.view(), View::Placeholder(NavigationSection::Dashboard));
        app.set_section(NavigationSection::Files).unwrap();
        assert_eq!(app.view(), View::Placeholder(NavigationSection::Files));
        app.set_section(NavigationSection::Upload).unwrap();
        assert!(matches!(app.view(), View::Upload(_)));
    }

    #[test(tokio::test(start_paused = true))]
    async fn test_csv_to_json_scenario() {
        let mut app = signed_in().await;
        app.submit_file(csv_candidate("report.csv")).unwrap();
        assert_eq!(app.workflow_state().conversion_phase, ConversionPhase::Idle);

        app.start_conversion(Some(DataFormat::Json)).unwrap();
        tokio::time::sleep(Duration::from_millis(2300)).await;

        let state = app.workflow_state();
        assert_eq!(state.conversion_phase, ConversionPhase::Succeeded);
        assert_eq!(state.progress_percent, 100);

        let artifact = app.download().unwrap();
        assert_eq!(artifact.file_name, "report.json");
        assert_eq!(&*artifact.content, SAMPLE_CSV);

        let sink = MemorySink::default();
        sink.save(&artifact).await.unwrap();
        assert_eq!(sink.saved().len(), 1);

        app.reset().unwrap();
        assert_eq!(app.workflow_state(), WorkflowState::default());
    }

    #[test(tokio::test)]
    async fn test_rejected_txt_scenario() {
        let mut app = signed_in().await;
        let error = app.submit_file(candidate("data.txt", b"plain text")).unwrap_err();
        assert!(matches!(error, AppError::Upload(UploadError::UnsupportedFileType(_))));
        let state = app.workflow_state();
        assert!(state.selected_file.is_none());
        assert_eq!(state.conversion_phase, ConversionPhase::Idle);
    }

    #[test(tokio::test)]
    async fn test_observer_sees_upload() {
        let mut app = signed_in().await;
        let mut receiver = app.subscribe();
        app.submit_file(csv_candidate("report.csv")).unwrap();
        assert!(receiver.has_changed().unwrap());
        let state = receiver.borrow_and_update().clone();
        assert_eq!(state.selected_file.unwrap().name, "report.csv");
        assert_eq!(app.available_targets(), &[DataFormat::Parquet, DataFormat::Avro]);
    }
}
