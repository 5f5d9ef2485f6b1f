//! Reactive glue around the OTP core for the verification pages.
//!
//! Owns the collector, countdown and phase signals of one attempt, drives
//! the one-second ticker and turns sequencer results into messages and
//! delayed redirects.

use crate::{
    api::{ApiClient, OtpPurpose},
    config::{self, FlowSettings},
    otp::{
        sequencer::{LOGIN_PATH, REGISTER_START_PATH},
        Completion, Countdown, Finalize, FlowError, OtpCollector, OtpDispatcher, OtpSequencer,
        Phase, ResendBlocked, Tick, VerificationGateway,
    },
    state::session::{use_capabilities, use_session, Capabilities, SessionState},
    utils::{navigation::Navigator, timer},
};
use leptos::*;
use std::rc::Rc;

type Hook = Rc<dyn Fn()>;
type SuccessHook = Rc<dyn Fn(&Completion)>;

/// Per-page parameters of an attempt.
#[derive(Clone)]
pub struct OtpFlowConfig {
    pub purpose: OtpPurpose,
    pub email: String,
    /// Runs when the attempt expires, before the redirect is scheduled.
    pub on_expired: Option<Hook>,
    /// Runs after finalize succeeded and tokens were stored.
    pub on_success: Option<SuccessHook>,
}

impl OtpFlowConfig {
    pub fn new(purpose: OtpPurpose, email: impl Into<String>) -> Self {
        Self {
            purpose,
            email: email.into(),
            on_expired: None,
            on_success: None,
        }
    }

    pub fn on_expired(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_expired = Some(Rc::new(hook));
        self
    }

    pub fn on_success(mut self, hook: impl Fn(&Completion) + 'static) -> Self {
        self.on_success = Some(Rc::new(hook));
        self
    }
}

pub struct OtpFlowDeps {
    pub gateway: Rc<dyn VerificationGateway>,
    pub caps: Capabilities,
    pub settings: FlowSettings,
}

/// Where an expired attempt sends the user.
pub fn expiry_destination(purpose: OtpPurpose) -> &'static str {
    match purpose {
        OtpPurpose::Register => REGISTER_START_PATH,
        OtpPurpose::ResetPassword => LOGIN_PATH,
    }
}

#[derive(Clone, Copy)]
pub struct OtpFlow {
    pub purpose: OtpPurpose,
    pub collector: RwSignal<OtpCollector>,
    pub countdown: RwSignal<Countdown>,
    pub phase: RwSignal<Phase>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub submit_action: Action<Finalize, Result<Completion, FlowError>>,
    pub resend_action: Action<(), Result<(), FlowError>>,
    sequencer: StoredValue<Rc<OtpSequencer>>,
    navigator: StoredValue<Rc<dyn Navigator>>,
    on_expired: StoredValue<Option<Hook>>,
    expiry_redirect_ms: u32,
}

impl OtpFlow {
    /// Submit control state: digits complete and nothing outstanding.
    pub fn can_submit(&self) -> bool {
        let phase = self.phase.get();
        !phase.is_busy() && !phase.is_terminal() && self.collector.with(OtpCollector::is_complete)
    }

    pub fn submit(&self, finalize: Finalize) {
        let phase = self.phase.get_untracked();
        if phase.is_busy() || phase.is_terminal() {
            return;
        }
        self.error.set(None);
        self.submit_action.dispatch(finalize);
    }

    pub fn resend(&self) {
        if self.resend_action.pending().get_untracked() {
            return;
        }
        let countdown = self.countdown.get_untracked();
        if !countdown.is_running() {
            return;
        }
        if !countdown.can_resend() {
            self.notice.set(Some(format!(
                "Please wait {} seconds before requesting another code.",
                countdown.resend_wait()
            )));
            return;
        }
        self.error.set(None);
        self.resend_action.dispatch(());
    }

    /// One second of the ticker.
    pub fn tick(&self) {
        let in_flight = self
            .sequencer
            .try_with_value(|s| s.is_in_flight())
            .unwrap_or(false);
        let tick = self
            .countdown
            .try_update(|c| c.tick(in_flight))
            .unwrap_or(Tick::Stopped);
        if tick == Tick::Expired {
            self.expire();
        }
    }

    fn expire(&self) {
        log::info!("verification code expired: purpose={}", self.purpose);
        self.sequencer.with_value(|s| s.mark_expired());
        self.phase.set(Phase::Expired);
        self.collector.update(OtpCollector::clear);
        self.error.set(None);
        self.notice.set(Some(FlowError::Expired.to_string()));
        if let Some(hook) = self.on_expired.get_value() {
            hook();
        }
        let path = expiry_destination(self.purpose);
        self.navigator
            .with_value(|nav| nav.navigate_after(path, self.expiry_redirect_ms));
    }

    fn settle_submit(&self, result: &Result<Completion, FlowError>) {
        match result {
            Ok(_) => {
                self.countdown.update(Countdown::halt);
                self.notice.set(None);
            }
            Err(FlowError::Expired) | Err(FlowError::InFlight) => {}
            Err(err) => {
                self.error.set(Some(err.to_string()));
                if let Some(redirect) = err.redirect() {
                    self.countdown.update(Countdown::halt);
                    self.phase.set(Phase::FinalizeFailed);
                    self.navigator
                        .with_value(|nav| nav.navigate_after(&redirect.path, redirect.delay_ms));
                }
            }
        }
    }

    fn settle_resend(&self, result: &Result<(), FlowError>, email: &str) {
        match result {
            Ok(()) => match self.countdown.try_update(Countdown::restart) {
                Some(Err(ResendBlocked::Expired)) => {}
                _ => {
                    self.collector.update(OtpCollector::clear);
                    self.notice
                        .set(Some(format!("A new code has been sent to {}.", email)));
                }
            },
            Err(err) => self.error.set(Some(err.to_string())),
        }
    }
}

/// Builds an attempt without starting the ticker.
pub fn create_otp_flow(config: OtpFlowConfig, deps: OtpFlowDeps) -> OtpFlow {
    let OtpFlowDeps {
        gateway,
        caps,
        settings,
    } = deps;
    let purpose = config.purpose;
    let collector = create_rw_signal(OtpCollector::new(settings.code_length));
    let countdown = create_rw_signal(Countdown::new(
        settings.ttl_secs,
        settings.resend_cooldown_secs,
    ));
    let phase = create_rw_signal(Phase::Idle);
    let error = create_rw_signal(None::<String>);
    let notice = create_rw_signal(None::<String>);

    let expiry_redirect_ms = settings.expiry_redirect_ms;
    let sequencer = Rc::new(OtpSequencer::new(
        gateway.clone(),
        caps.store.clone(),
        caps.navigator.clone(),
        settings,
    ));
    let dispatcher = OtpDispatcher::new(gateway);

    let (_session, set_session) = use_session();
    let seq_for_submit = sequencer.clone();
    let store_for_submit = caps.store.clone();
    let email_for_submit = config.email.clone();
    let on_success = config.on_success.clone();
    let submit_action = create_action(move |finalize: &Finalize| {
        let sequencer = seq_for_submit.clone();
        let store = store_for_submit.clone();
        let email = email_for_submit.clone();
        let finalize = finalize.clone();
        let on_success = on_success.clone();
        let code = collector.get_untracked();
        async move {
            // the session must be marked before the sequencer navigates to a guarded page
            let on_phase = move |p: Phase| {
                if p == Phase::FinalizeOk {
                    set_session.set(SessionState::from_store(store.as_ref()));
                }
                phase.set(p);
            };
            let result = sequencer.submit(&email, &code, finalize, &on_phase).await;
            if let (Ok(done), Some(hook)) = (&result, on_success) {
                hook(done);
            }
            result
        }
    });

    let email_for_resend = config.email.clone();
    let resend_action = create_action(move |_: &()| {
        let dispatcher = dispatcher.clone();
        let email = email_for_resend.clone();
        async move { dispatcher.request_code(purpose, &email).await }
    });

    let flow = OtpFlow {
        purpose,
        collector,
        countdown,
        phase,
        error,
        notice,
        submit_action,
        resend_action,
        sequencer: store_value(sequencer),
        navigator: store_value(caps.navigator),
        on_expired: store_value(config.on_expired),
        expiry_redirect_ms,
    };

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            flow.settle_submit(&result);
        }
    });

    let email = config.email;
    create_effect(move |_| {
        if let Some(result) = resend_action.value().get() {
            flow.settle_resend(&result, &email);
        }
    });

    flow
}

/// Attempt wired to the app's client and capabilities, ticking every second.
pub fn use_otp_flow(config: OtpFlowConfig) -> OtpFlow {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let flow = create_otp_flow(
        config,
        OtpFlowDeps {
            gateway: Rc::new(api),
            caps: use_capabilities(),
            settings: config::flow_settings(),
        },
    );
    let ticker = timer::every(1_000, move || flow.tick());
    store_value(ticker);
    flow
}
