//! The client side auth store and the server function filling it

use leptos::either::Either;
use leptos::prelude::*;
use panel_shared::{
    roles::{CombinedRole, PermissionSet},
    Session, User,
};

use super::shared::{CenterWrapper, Loader};

/// Who is signed in and what their roles allow
///
/// Components only read from the store; the App fills it once the session is loaded.
#[derive(Debug, Clone, Copy)]
pub struct AuthStore {
    pub user: RwSignal<Option<User>>,
    pub combined_role: RwSignal<Option<CombinedRole>>,
    /// set once the session request finished, successful or not
    pub loaded: RwSignal<bool>,
}
impl AuthStore {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            combined_role: RwSignal::new(None),
            loaded: RwSignal::new(false),
        }
    }

    pub fn set_user(&self, user: Option<User>) {
        self.user.set(user);
    }

    pub fn set_combined_role(&self, combined_role: Option<CombinedRole>) {
        self.combined_role.set(combined_role);
    }

    /// The pages the current principal may view, `None` while the role is not known
    pub fn page_access(&self) -> Option<PermissionSet> {
        self.combined_role
            .read()
            .as_ref()
            .map(CombinedRole::page_access)
    }
}
impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>().expect("App provides the auth store")
}

#[server]
pub async fn get_session() -> Result<Session, ServerFnError> {
    let config = use_context::<std::sync::Arc<crate::server::config::Config>>()
        .ok_or(ServerFnError::new("Unable to get config from context"))?;
    let session = config.session();
    tracing::debug!(
        "Handing out session for {} with role {}",
        session.user.username,
        session.combined_role.name
    );
    Ok(session)
}

/// Renders its children only while somebody is signed in
///
/// This is a convenience for the UI; the server decides what a session may see.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.user.read().is_some()
            fallback=move || {
                if auth.loaded.get() {
                    Either::Left(
                        view! {
                            <CenterWrapper>
                                <p>"You are not signed in. Reload the page to try again."</p>
                            </CenterWrapper>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <CenterWrapper>
                                <Loader />
                            </CenterWrapper>
                        },
                    )
                }
            }
        >
            {children()}
        </Show>
    }
}
