//! Registration Form Controller
//!
//! Owns the form state and drives submission.
//!
//! ## Submission
//! 1. A second submit while one is in flight returns [`SubmitOutcome::Busy`]
//! 2. An invalid form marks every field touched and sends nothing
//! 3. A valid form calls exactly one service method, picked by the mode
//! 4. Failures keep the entered values and set the error message
//!
//! The state lock is never held across an await.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use platform::clock::{Clock, SystemClock};

use crate::application::config::RegistrationConfig;
use crate::domain::form::{FormValues, RegistrationForm, ValidationReport};
use crate::domain::payload::RegistrationPayload;
use crate::domain::service::RegistrationService;
use crate::domain::value_object::{field::Field, user_type::UserType};
use crate::error::RegistrationResult;

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account created; show `notice` and go to `redirect_to`
    Registered { notice: String, redirect_to: String },
    /// Nothing was sent
    Invalid(ValidationReport),
    /// Another submission is still in flight
    Busy,
    /// The backend call failed; `message` is also kept as the error message
    Failed { message: String },
}

#[derive(Debug, Default)]
struct ControllerState {
    form: RegistrationForm,
    error_message: Option<String>,
    completed: bool,
}

/// Clears the loading flag however the submission ends
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct RegistrationFormController<S>
where
    S: RegistrationService,
{
    service: Arc<S>,
    clock: Arc<dyn Clock>,
    config: Arc<RegistrationConfig>,
    state: Mutex<ControllerState>,
    loading: AtomicBool,
}

impl<S> RegistrationFormController<S>
where
    S: RegistrationService + Send + Sync,
{
    pub fn new(service: Arc<S>, clock: Arc<dyn Clock>, config: Arc<RegistrationConfig>) -> Self {
        Self {
            service,
            clock,
            config,
            state: Mutex::new(ControllerState::default()),
            loading: AtomicBool::new(false),
        }
    }

    /// Controller reading today's date from the system clock
    pub fn with_system_clock(service: Arc<S>, config: Arc<RegistrationConfig>) -> Self {
        Self::new(service, Arc::new(SystemClock), config)
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn user_type(&self) -> UserType {
        self.state().form.user_type()
    }

    /// Switch between applicant and organization mode
    pub fn select_user_type(&self, user_type: UserType) {
        self.state().form.set_user_type(user_type);
    }

    pub fn set_text(&self, field: Field, value: impl Into<String>) -> RegistrationResult<()> {
        self.state().form.set_text(field, value)
    }

    pub fn set_terms(&self, accepted: bool) {
        self.state().form.set_terms(accepted);
    }

    pub fn touch(&self, field: Field) {
        self.state().form.touch(field);
    }

    pub fn field_error(&self, field: Field) -> Option<String> {
        let today = self.clock.today();
        self.state().form.field_error(field, today)
    }

    pub fn form_error(&self) -> Option<&'static str> {
        self.state().form.form_error()
    }

    pub fn is_valid(&self) -> bool {
        let today = self.clock.today();
        self.state().form.is_valid(today)
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Message of the last failed submission
    pub fn error_message(&self) -> Option<String> {
        self.state().error_message.clone()
    }

    pub fn is_complete(&self) -> bool {
        self.state().completed
    }

    /// Snapshot of the current values
    pub fn values(&self) -> FormValues {
        self.state().form.values().clone()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_loading) = LoadingGuard::acquire(&self.loading) else {
            tracing::debug!("Submission already in flight");
            return SubmitOutcome::Busy;
        };

        let today = self.clock.today();
        let payload = {
            let mut state = self.state();
            match state.form.to_payload(today) {
                Ok(payload) => {
                    state.error_message = None;
                    payload
                }
                Err(report) => {
                    state.form.touch_all();
                    tracing::debug!(
                        failing_fields = report.fields.len(),
                        "Registration form invalid"
                    );
                    return SubmitOutcome::Invalid(report);
                }
            }
        };

        let user_type = payload.user_type();
        let result = match &payload {
            RegistrationPayload::Applicant(p) => self.service.register_applicant(p).await,
            RegistrationPayload::Organization(p) => self.service.register_organization(p).await,
        };

        match result {
            Ok(()) => {
                self.state().completed = true;
                tracing::info!(
                    user_type = %user_type,
                    email = %payload.email(),
                    "Registration completed"
                );
                SubmitOutcome::Registered {
                    notice: self.config.success_message.clone(),
                    redirect_to: self.config.login_path.clone(),
                }
            }
            Err(e) => {
                e.log();
                let message = e.user_message(&self.config.generic_error_message);
                self.state().error_message = Some(message.clone());
                SubmitOutcome::Failed { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use chrono::NaiveDate;
    use platform::clock::FixedClock;
    use tokio::sync::Notify;

    use super::*;
    use crate::domain::payload::{ApplicantPayload, OrganizationPayload};
    use crate::error::RegistrationError;

    #[derive(Default)]
    struct MockService {
        applicant_calls: AtomicUsize,
        organization_calls: AtomicUsize,
        last_applicant: Mutex<Option<ApplicantPayload>>,
        reject_with: Option<(u16, Option<String>)>,
        gate: Option<Arc<Notify>>,
    }

    impl MockService {
        async fn respond(&self) -> RegistrationResult<()> {
            match &self.gate {
                Some(gate) => gate.notified().await,
                None => tokio::task::yield_now().await,
            }
            match &self.reject_with {
                Some((status, detail)) => Err(RegistrationError::Rejected {
                    status: *status,
                    detail: detail.clone(),
                }),
                None => Ok(()),
            }
        }

        fn total_calls(&self) -> usize {
            self.applicant_calls.load(Ordering::SeqCst)
                + self.organization_calls.load(Ordering::SeqCst)
        }
    }

    impl RegistrationService for MockService {
        async fn register_applicant(&self, payload: &ApplicantPayload) -> RegistrationResult<()> {
            self.applicant_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_applicant.lock().unwrap() = Some(payload.clone());
            self.respond().await
        }

        async fn register_organization(
            &self,
            _payload: &OrganizationPayload,
        ) -> RegistrationResult<()> {
            self.organization_calls.fetch_add(1, Ordering::SeqCst);
            self.respond().await
        }
    }

    fn build_controller(
        service: MockService,
    ) -> (RegistrationFormController<MockService>, Arc<MockService>) {
        let service = Arc::new(service);
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let controller = RegistrationFormController::new(
            service.clone(),
            Arc::new(FixedClock(today)),
            Arc::new(RegistrationConfig::default()),
        );
        (controller, service)
    }

    fn fill_common(controller: &RegistrationFormController<MockService>) {
        controller.set_text(Field::Email, "a@b.com").unwrap();
        controller.set_text(Field::Password, "longpass1").unwrap();
        controller.set_text(Field::ConfirmPassword, "longpass1").unwrap();
        controller.set_text(Field::Name, "Ana").unwrap();
        controller.set_terms(true);
    }

    fn fill_applicant(controller: &RegistrationFormController<MockService>) {
        fill_common(controller);
        controller.set_text(Field::Surname, "Ruiz").unwrap();
        controller.set_text(Field::Gender, "female").unwrap();
        controller.set_text(Field::BirthDate, "2000-01-01").unwrap();
    }

    #[tokio::test]
    async fn test_applicant_submit_calls_applicant_endpoint_once() {
        let (controller, service) = build_controller(MockService::default());
        fill_applicant(&controller);

        let outcome = controller.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Registered {
                notice: "¡Registro exitoso! Ya puedes iniciar sesión.".to_string(),
                redirect_to: "/login".to_string(),
            }
        );
        assert_eq!(service.applicant_calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.organization_calls.load(Ordering::SeqCst), 0);
        assert!(controller.is_complete());
        assert!(!controller.is_loading());

        let sent = service.last_applicant.lock().unwrap().clone().unwrap();
        assert_eq!(sent.birth_date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[tokio::test]
    async fn test_organization_submit_calls_organization_endpoint() {
        let (controller, service) = build_controller(MockService::default());
        fill_applicant(&controller);
        controller.select_user_type(UserType::Organization);
        controller.set_text(Field::Description, "Consultora").unwrap();

        assert!(matches!(
            controller.submit().await,
            SubmitOutcome::Registered { .. }
        ));
        assert_eq!(service.applicant_calls.load(Ordering::SeqCst), 0);
        assert_eq!(service.organization_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing_and_touches_all() {
        let (controller, service) = build_controller(MockService::default());
        controller.set_text(Field::Email, "a@b.com").unwrap();
        assert_eq!(controller.field_error(Field::Name), None);

        let outcome = controller.submit().await;
        let SubmitOutcome::Invalid(report) = outcome else {
            panic!("expected invalid outcome, got {outcome:?}");
        };
        assert!(report.fields.contains_key(&Field::Name));
        assert_eq!(service.total_calls(), 0);
        assert_eq!(
            controller.field_error(Field::Name),
            Some("nombre es requerido".to_string())
        );
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_password_mismatch_blocks_submit() {
        let (controller, service) = build_controller(MockService::default());
        fill_applicant(&controller);
        controller.set_text(Field::ConfirmPassword, "different1").unwrap();

        let outcome = controller.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(service.total_calls(), 0);
        assert_eq!(controller.form_error(), Some("Las contraseñas no coinciden"));
    }

    #[tokio::test]
    async fn test_failure_with_detail_keeps_values() {
        let (controller, _service) = build_controller(MockService {
            reject_with: Some((400, Some("El email ya está registrado".to_string()))),
            ..Default::default()
        });
        fill_applicant(&controller);
        let before = controller.values();

        let outcome = controller.submit().await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "El email ya está registrado".to_string()
            }
        );
        assert_eq!(
            controller.error_message().as_deref(),
            Some("El email ya está registrado")
        );
        assert_eq!(controller.values(), before);
        assert!(!controller.is_complete());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_invalid_resubmit_keeps_server_message() {
        let (controller, service) = build_controller(MockService {
            reject_with: Some((400, Some("El email ya está registrado".to_string()))),
            ..Default::default()
        });
        fill_applicant(&controller);
        assert!(matches!(
            controller.submit().await,
            SubmitOutcome::Failed { .. }
        ));

        controller.set_text(Field::Name, "").unwrap();
        let outcome = controller.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(service.total_calls(), 1);
        assert_eq!(
            controller.error_message().as_deref(),
            Some("El email ya está registrado")
        );
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_valid_resubmit_clears_server_message() {
        let gate = Arc::new(Notify::new());
        let (controller, _service) = build_controller(MockService {
            reject_with: Some((500, None)),
            gate: Some(gate.clone()),
            ..Default::default()
        });
        fill_applicant(&controller);
        gate.notify_one();
        controller.submit().await;
        assert!(controller.error_message().is_some());

        let submit = controller.submit();
        tokio::pin!(submit);
        tokio::select! {
            biased;
            _ = &mut submit => panic!("submit finished before the service answered"),
            _ = tokio::task::yield_now() => {}
        }
        assert_eq!(controller.error_message(), None);

        gate.notify_one();
        submit.await;
        assert!(controller.error_message().is_some());
    }

    #[tokio::test]
    async fn test_failure_without_detail_uses_generic_message() {
        let (controller, _service) = build_controller(MockService {
            reject_with: Some((500, None)),
            ..Default::default()
        });
        fill_applicant(&controller);

        controller.submit().await;
        assert_eq!(
            controller.error_message().as_deref(),
            Some("Error en el registro. Por favor, intenta de nuevo.")
        );
    }

    #[tokio::test]
    async fn test_concurrent_submit_is_busy() {
        let (controller, service) = build_controller(MockService::default());
        fill_applicant(&controller);

        let (first, second) = tokio::join!(controller.submit(), controller.submit());
        assert!(matches!(first, SubmitOutcome::Registered { .. }));
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(service.total_calls(), 1);
    }

    #[tokio::test]
    async fn test_loading_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let (controller, service) = build_controller(MockService {
            gate: Some(gate.clone()),
            ..Default::default()
        });
        fill_applicant(&controller);
        assert!(!controller.is_loading());

        let submit = controller.submit();
        tokio::pin!(submit);
        tokio::select! {
            biased;
            _ = &mut submit => panic!("submit finished before the service answered"),
            _ = tokio::task::yield_now() => {}
        }
        assert!(controller.is_loading());
        assert_eq!(service.total_calls(), 1);

        gate.notify_one();
        assert!(matches!(submit.await, SubmitOutcome::Registered { .. }));
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_dropped_submit_releases_loading() {
        let gate = Arc::new(Notify::new());
        let (controller, _service) = build_controller(MockService {
            gate: Some(gate),
            ..Default::default()
        });
        fill_applicant(&controller);

        {
            let submit = controller.submit();
            tokio::pin!(submit);
            tokio::select! {
                biased;
                _ = &mut submit => panic!("submit finished before the service answered"),
                _ = tokio::task::yield_now() => {}
            }
            assert!(controller.is_loading());
        }
        assert!(!controller.is_loading());
    }

    #[test]
    fn test_mode_switch_through_controller() {
        let (controller, _service) = build_controller(MockService::default());
        fill_applicant(&controller);
        controller.select_user_type(UserType::Organization);

        assert_eq!(controller.user_type(), UserType::Organization);
        let values = controller.values();
        assert!(values.surname.is_empty());
        assert!(values.gender.is_empty());
        assert!(values.birth_date.is_empty());
        assert!(!controller.is_valid());

        controller.set_text(Field::Description, "Consultora").unwrap();
        assert!(controller.is_valid());
    }
}
