//! MailerLite integration.
//!
//! [`ScriptLoader`] injects the provider's universal script at most once and
//! tracks its loading phase; [`MailerEmbed`] renders the embedded form
//! container and asks the script to fill it once ready. The loader lives in
//! reactive context so every embed on the page shares one script tag.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// Hosted entry point for the provider's universal script.
pub const SCRIPT_SRC: &str = "https://assets.mailerlite.com/js/universal.js";

/// Account the embedded forms belong to.
pub const ACCOUNT_ID: &str = "1711800";

/// Form rendered in the contact panel.
pub const WAITLIST_FORM_ID: &str = "VwNvZ7";

/// Loading phases for the external script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Injecting,
    Ready,
    Failed,
}

struct LoaderState {
    src: String,
    phase: LoadPhase,
    waiters: Vec<Box<dyn FnOnce()>>,
}

/// Reference-counted handle around the script-loading state.
///
/// Clones share one state: [`ScriptLoader::ensure`] injects the script tag at
/// most once per shared state, and [`ScriptLoader::on_ready`] either runs its
/// callback immediately or queues it until the script's onload fires.
#[derive(Clone)]
pub struct ScriptLoader {
    state: Rc<RefCell<LoaderState>>,
    /// Flips to `true` when the script has loaded.
    pub ready: RwSignal<bool>,
}

impl ScriptLoader {
    pub fn new(src: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(LoaderState {
                src: src.to_string(),
                phase: LoadPhase::Idle,
                waiters: Vec::new(),
            })),
            ready: RwSignal::new(false),
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.borrow().phase
    }

    /// Runs `callback` once the script is callable: immediately when already
    /// loaded, queued until onload otherwise. Callbacks registered after a
    /// load failure are dropped.
    pub fn on_ready(&self, callback: impl FnOnce() + 'static) {
        match self.phase() {
            LoadPhase::Ready => callback(),
            LoadPhase::Failed => {}
            LoadPhase::Idle | LoadPhase::Injecting => {
                self.state.borrow_mut().waiters.push(Box::new(callback));
            }
        }
    }

    /// Injects the script tag unless a previous call already did.
    pub fn ensure(&self) {
        if !self.begin_injection() {
            return;
        }
        install_command_queue();
        ml_call_str("account", ACCOUNT_ID);
        self.inject();
    }

    fn begin_injection(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.phase != LoadPhase::Idle {
            return false;
        }
        state.phase = LoadPhase::Injecting;
        true
    }

    fn inject(&self) {
        let src = self.state.borrow().src.clone();
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            self.fail_with_log();
            return;
        };
        let Some(script) = document
            .create_element("script")
            .ok()
            .and_then(|element| element.dyn_into::<web_sys::HtmlScriptElement>().ok())
        else {
            self.fail_with_log();
            return;
        };
        script.set_src(&src);
        script.set_async(true);

        let loaded = self.clone();
        let onload = Closure::once(Box::new(move || loaded.mark_ready()) as Box<dyn FnOnce()>);
        script.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let failed = self.clone();
        let onerror = Closure::once(Box::new(move || failed.fail_with_log()) as Box<dyn FnOnce()>);
        script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        match document.body() {
            Some(body) => {
                if body.append_child(&script).is_err() {
                    self.fail_with_log();
                }
            }
            None => self.fail_with_log(),
        }
    }

    fn mark_ready(&self) {
        // Waiters run after the borrow ends so they may register new ones.
        let waiters = {
            let mut state = self.state.borrow_mut();
            state.phase = LoadPhase::Ready;
            std::mem::take(&mut state.waiters)
        };
        self.ready.set(true);
        for waiter in waiters {
            waiter();
        }
    }

    fn mark_failed(&self) {
        let mut state = self.state.borrow_mut();
        state.phase = LoadPhase::Failed;
        state.waiters.clear();
    }

    fn fail_with_log(&self) {
        web_sys::console::error_1(&JsValue::from_str("MailerLite script failed to load"));
        self.mark_failed();
    }
}

// ============================================================================
// window.ml plumbing
// ============================================================================

/// Installs the command queue the universal script drains on load:
/// `window.ml = function () { (window.ml.q = window.ml.q || []).push(arguments) }`.
fn install_command_queue() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let ml_key = JsValue::from_str("ml");
    if Reflect::has(&window, &ml_key).unwrap_or(false) {
        return;
    }
    let shim = js_sys::Function::new_no_args("(window.ml.q = window.ml.q || []).push(arguments);");
    let _ = Reflect::set(&window, &ml_key, &shim);
}

fn ml_call(command: &str, argument: &JsValue) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(ml) = Reflect::get(&window, &JsValue::from_str("ml")) {
        if let Some(function) = ml.dyn_ref::<js_sys::Function>() {
            let _ = function.call2(&window, &JsValue::from_str(command), argument);
        }
    }
}

fn ml_call_str(command: &str, argument: &str) {
    ml_call(command, &JsValue::from_str(argument));
}

// ============================================================================
// Components
// ============================================================================

/// The provider's embedded form, rendered into its expected container class.
#[component]
pub fn MailerEmbed(#[prop(default = WAITLIST_FORM_ID)] form_id: &'static str) -> impl IntoView {
    let loader = expect_context::<send_wrapper::SendWrapper<ScriptLoader>>().take();
    loader.on_ready(move || {
        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("formId"),
            &JsValue::from_str(form_id),
        );
        ml_call("forms.render", &options.into());
    });
    loader.ensure();

    let ready = loader.ready;
    view! {
        <div class="mailer-embed">
            <Show when=move || !ready.get()>
                <p class="mailer-embed-loading">"Loading newsletter form"</p>
            </Show>
            <div class="ml-embedded" data-form=form_id></div>
        </div>
    }
}
