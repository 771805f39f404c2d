//! The session store: one authoritative copy of "who is signed in".
//!
//! State transitions go through [`SessionStore`] only. Every successful
//! transition rewrites the storage mirror before updating the in-memory
//! state, so the two never disagree. Failures leave both untouched, emit a
//! destructive notification, and return the error to the caller.

use std::sync::{Arc, PoisonError, RwLock};

use realty_client::ApiClient;
use realty_core::entities::Session;
use realty_core::requests::{LoginRequest, ProfileUpdate, RegisterRequest};
use realty_forms::{Form, LoginForm, ProfileForm, RegistrationForm};
use tokio::task::JoinHandle;

use crate::error::AuthError;
use crate::mirror;
use crate::notify::{Notification, Notifier};
use crate::storage::KeyValueStorage;

/// Where the store stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// Storage has not been read yet.
    Unknown,
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

struct State {
    auth: AuthState,
    pending: usize,
}

struct Shared {
    client: ApiClient,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<State>,
}

/// Cheaply cloneable handle; clones share one state.
#[derive(Clone)]
pub struct SessionStore {
    shared: Arc<Shared>,
}

/// Marks an operation in flight for [`SessionStore::is_loading`].
struct Pending<'a>(&'a Shared);

impl<'a> Pending<'a> {
    fn start(shared: &'a Shared) -> Self {
        shared.write().pending += 1;
        Self(shared)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        let mut state = self.0.write();
        state.pending = state.pending.saturating_sub(1);
    }
}

impl Shared {
    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_auth(&self, auth: AuthState) {
        self.write().auth = auth;
    }

    fn current_id(&self) -> Option<i64> {
        self.read().auth.session().map(|s| s.id)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.read();
        f.debug_struct("SessionStore")
            .field("auth", &state.auth)
            .field("pending", &state.pending)
            .finish_non_exhaustive()
    }
}

/// Failure text: the backend's message when it sent one, else `fallback`.
fn describe(err: &AuthError, fallback: &str) -> String {
    match err {
        AuthError::Api(api) => api.remote_message().unwrap_or(fallback).to_string(),
        _ => fallback.to_string(),
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(
        client: ApiClient,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                client,
                storage,
                notifier,
                state: RwLock::new(State {
                    auth: AuthState::Unknown,
                    pending: 0,
                }),
            }),
        }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.shared.client
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.shared.read().auth.clone()
    }

    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.shared.read().auth.session().cloned()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.shared.read().auth, AuthState::Authenticated(_))
    }

    /// Whether the signed-in account may manage listings.
    #[must_use]
    pub fn is_landlord(&self) -> bool {
        self.shared
            .read()
            .auth
            .session()
            .is_some_and(Session::is_landlord)
    }

    /// True until storage has been read, and while any operation is in
    /// flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        let state = self.shared.read();
        state.auth == AuthState::Unknown || state.pending > 0
    }

    /// The signed-in session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when nobody is signed in.
    pub fn require(&self) -> Result<Session, AuthError> {
        self.current().ok_or(AuthError::NotAuthenticated)
    }

    fn notify(&self, notification: Notification) {
        self.shared.notifier.notify(notification);
    }

    fn storage(&self) -> &dyn KeyValueStorage {
        self.shared.storage.as_ref()
    }

    /// Adopt `session`: mirror first, then memory.
    fn adopt(&self, session: Session) -> Result<Session, AuthError> {
        mirror::write(self.storage(), &session)?;
        self.shared.set_auth(AuthState::Authenticated(session.clone()));
        Ok(session)
    }

    // ── start-up ───────────────────────────────────────────────────

    /// Load the stored session without contacting the backend.
    ///
    /// The session is usable immediately; call [`Self::verify`] or
    /// [`Self::spawn_verification`] to confirm it still exists.
    pub fn restore(&self) -> AuthState {
        let auth = match mirror::read(self.storage()) {
            Ok(Some(session)) => AuthState::Authenticated(session),
            Ok(None) => AuthState::Anonymous,
            Err(e) => {
                tracing::warn!(%e, "could not read stored session");
                AuthState::Anonymous
            }
        };
        self.shared.set_auth(auth.clone());
        auth
    }

    /// Confirm the current session against `GET /api/users/:id`.
    ///
    /// A non-success response purges the session (storage and memory). A
    /// transport failure keeps it: the stored copy stays usable offline.
    /// If the session changed while the request was in flight, the outcome
    /// is ignored.
    pub async fn verify(&self) -> AuthState {
        let Some(id) = self.shared.current_id() else {
            return self.state();
        };
        let _pending = Pending::start(&self.shared);

        match self.shared.client.get_user(id).await {
            Ok(_) => tracing::debug!(user_id = id, "stored session verified"),
            Err(e) if e.status().is_some() => {
                if self.shared.current_id() == Some(id) {
                    tracing::info!(user_id = id, %e, "stored session no longer valid; clearing");
                    if let Err(e) = mirror::clear(self.storage()) {
                        tracing::warn!(%e, "failed to clear stored session");
                    }
                    self.shared.set_auth(AuthState::Anonymous);
                }
            }
            Err(e) => {
                tracing::warn!(user_id = id, %e, "could not verify stored session; keeping it");
            }
        }
        self.state()
    }

    /// Restore, then verify. Returns once the outcome is known.
    pub async fn init(&self) -> AuthState {
        self.restore();
        self.verify().await
    }

    /// Run [`Self::verify`] in the background.
    pub fn spawn_verification(&self) -> JoinHandle<AuthState> {
        let store = self.clone();
        tokio::spawn(async move { store.verify().await })
    }

    // ── transitions ────────────────────────────────────────────────

    /// Sign in and persist the returned session.
    ///
    /// # Errors
    ///
    /// Returns the backend or storage failure; the prior state is kept.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        self.login_with(&LoginRequest::new(username, password)).await
    }

    /// Validate the login form, then sign in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Invalid`] without contacting the backend when
    /// the form fails validation.
    pub async fn submit_login(&self, form: &LoginForm) -> Result<Session, AuthError> {
        let request = form.validate()?;
        self.login_with(&request).await
    }

    async fn login_with(&self, request: &LoginRequest) -> Result<Session, AuthError> {
        let _pending = Pending::start(&self.shared);
        let result = async {
            let session = self.shared.client.login(request).await?;
            self.adopt(session)
        }
        .await;

        match &result {
            Ok(session) => {
                tracing::info!(user_id = session.id, "signed in");
                self.notify(Notification::info(
                    "Login Successful",
                    format!("Welcome back, {}!", session.display_name()),
                ));
            }
            Err(e) => self.notify(Notification::error(
                "Login Failed",
                describe(e, "Invalid username or password"),
            )),
        }
        result
    }

    /// Create an account and sign in as it.
    ///
    /// # Errors
    ///
    /// Returns the backend or storage failure; the prior state is kept.
    pub async fn register(&self, request: RegisterRequest) -> Result<Session, AuthError> {
        let _pending = Pending::start(&self.shared);
        let request = request.with_confirmation();
        let result = async {
            let session = self.shared.client.register(&request).await?;
            self.adopt(session)
        }
        .await;

        match &result {
            Ok(session) => {
                tracing::info!(user_id = session.id, "account created");
                self.notify(Notification::info(
                    "Registration Successful",
                    format!("Welcome to Realty Estate, {}!", session.display_name()),
                ));
            }
            Err(e) => self.notify(Notification::error(
                "Registration Failed",
                describe(e, "Failed to create account"),
            )),
        }
        result
    }

    /// Validate the registration form, then register.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Invalid`] without contacting the backend when
    /// the form fails validation (e.g. mismatched passwords).
    pub async fn submit_registration(&self, form: &RegistrationForm) -> Result<Session, AuthError> {
        let request = form.validate()?;
        self.register(request).await
    }

    /// Apply a profile change to `user_id` via `PATCH /api/users/:id`. The
    /// backend's response replaces the stored session wholesale; fields it
    /// omits are gone afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] when nobody is signed in and
    /// [`AuthError::ForeignProfile`] when `user_id` is not the signed-in
    /// user; neither contacts the backend. Otherwise returns the backend or
    /// storage failure.
    pub async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
    ) -> Result<Session, AuthError> {
        let current = self.require()?;
        if current.id != user_id {
            return Err(AuthError::ForeignProfile {
                requested: user_id,
                current: current.id,
            });
        }
        let _pending = Pending::start(&self.shared);
        let result = async {
            let session = self.shared.client.update_user(user_id, update).await?;
            self.adopt(session)
        }
        .await;

        match &result {
            Ok(session) => {
                tracing::info!(user_id = session.id, "profile updated");
                self.notify(Notification::info(
                    "Profile Updated",
                    "Your profile has been successfully updated.",
                ));
            }
            Err(e) => self.notify(Notification::error(
                "Update Failed",
                describe(e, "Failed to update profile"),
            )),
        }
        result
    }

    /// Validate the profile form, then update.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Invalid`] without contacting the backend when
    /// the form fails validation.
    pub async fn submit_profile(
        &self,
        user_id: i64,
        form: &ProfileForm,
    ) -> Result<Session, AuthError> {
        let update = form.validate()?;
        self.update_profile(user_id, &update).await
    }

    /// Sign out locally. No request is made; a storage failure is logged
    /// and memory is cleared regardless.
    pub fn logout(&self) {
        if let Err(error) = mirror::clear(self.storage()) {
            tracing::warn!(%error, "failed to clear stored session");
        }
        self.shared.set_auth(AuthState::Anonymous);
        tracing::info!("signed out");
        self.notify(Notification::info(
            "Logged Out",
            "You have been successfully logged out.",
        ));
    }
}

