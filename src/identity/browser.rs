//! Browser binding to the host page's identity adapter.
//!
//! The page installs `window.ridewiseIdentity` wrapping the identity SDK:
//!
//! - `onAuthStateChanged(callback) -> unsubscribe`: `callback` receives the
//!   SDK user object (read for `email` and `photoURL`) or `null`.
//! - `signOut() -> Promise`
//!
//! Rust closures handed to JS live in a thread-local registry until
//! unsubscribed, so the provider itself stays a plain `Send + Sync` value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use super::{Identity, IdentityError, IdentityListener, IdentityProvider, ListenerId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ridewiseIdentity, js_name = onAuthStateChanged, catch)]
    fn on_auth_state_changed(callback: &Closure<dyn FnMut(JsValue)>) -> Result<js_sys::Function, JsValue>;

    #[wasm_bindgen(js_namespace = ridewiseIdentity, js_name = signOut, catch)]
    fn sign_out_js() -> Result<js_sys::Promise, JsValue>;
}

struct Registration {
    _callback: Closure<dyn FnMut(JsValue)>,
    unsubscribe: js_sys::Function,
}

thread_local! {
    static REGISTRATIONS: RefCell<HashMap<u64, Registration>> = RefCell::new(HashMap::new());
}

#[derive(Debug, Default)]
pub struct BrowserIdentityProvider {
    next_id: AtomicU64,
}

#[async_trait(?Send)]
impl IdentityProvider for BrowserIdentityProvider {
    fn subscribe(&self, listener: IdentityListener) -> ListenerId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| listener(identity_from_js(&user)));
        match on_auth_state_changed(&callback) {
            Ok(unsubscribe) => {
                REGISTRATIONS.with(|regs| {
                    regs.borrow_mut().insert(id, Registration { _callback: callback, unsubscribe });
                });
            }
            Err(e) => leptos::logging::error!("identity adapter subscribe failed: {}", js_error_message(&e)),
        }
        ListenerId(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let removed = REGISTRATIONS.with(|regs| regs.borrow_mut().remove(&id.0));
        if let Some(registration) = removed {
            if let Err(e) = registration.unsubscribe.call0(&JsValue::NULL) {
                leptos::logging::warn!("identity adapter unsubscribe failed: {}", js_error_message(&e));
            }
        }
    }

    async fn sign_out(&self) -> Result<(), IdentityError> {
        let promise = sign_out_js().map_err(|_| IdentityError::Unavailable)?;
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| IdentityError::SignOut(js_error_message(&e)))
    }
}

fn identity_from_js(user: &JsValue) -> Option<Identity> {
    if user.is_null() || user.is_undefined() {
        return None;
    }
    Some(Identity { email: string_field(user, "email"), photo_url: string_field(user, "photoURL") })
}

fn string_field(object: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_string())
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| string_field(value, "message"))
        .unwrap_or_else(|| format!("{value:?}"))
}
