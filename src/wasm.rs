//! WebAssembly bindings for the card form engine.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { FormEngine } from 'card_form';
//!
//! await init();
//!
//! const form = new FormEngine(false, (snapshot) => {
//!     numberInput.value = snapshot.number;
//!     numberInput.classList.toggle('error', snapshot.numberStatus === 'invalid');
//!     submit.disabled = !snapshot.valid;
//! });
//!
//! numberInput.addEventListener('input', (e) => form.updateField('number', e.target.value));
//! ```

#![cfg(feature = "wasm")]

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::engine::{FormEngine, FormSnapshot};
use crate::{FieldName, FormConfig};

/// Snapshot handed to JavaScript after every update.
#[wasm_bindgen(js_name = FormSnapshot)]
pub struct WasmSnapshot {
    inner: Arc<FormSnapshot>,
}

#[wasm_bindgen(js_class = FormSnapshot)]
impl WasmSnapshot {
    #[wasm_bindgen(getter)]
    pub fn number(&self) -> String {
        self.inner.values.number.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn expiry(&self) -> String {
        self.inner.values.expiry.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cvc(&self) -> String {
        self.inner.values.cvc.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.values.name.clone()
    }

    /// Network tag, e.g. `"visa"` or `"unknown"`.
    #[wasm_bindgen(getter, js_name = "type")]
    pub fn network(&self) -> String {
        self.inner.values.network.tag().to_string()
    }

    #[wasm_bindgen(getter, js_name = numberStatus)]
    pub fn number_status(&self) -> String {
        self.inner.status.number.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = expiryStatus)]
    pub fn expiry_status(&self) -> String {
        self.inner.status.expiry.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = cvcStatus)]
    pub fn cvc_status(&self) -> String {
        self.inner.status.cvc.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = nameStatus)]
    pub fn name_status(&self) -> String {
        self.inner.status.name.as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.inner.valid
    }
}

/// Card form engine driven from JavaScript input events.
#[wasm_bindgen(js_name = FormEngine)]
pub struct WasmFormEngine {
    inner: FormEngine,
}

#[wasm_bindgen(js_class = FormEngine)]
impl WasmFormEngine {
    /// Creates an engine. `on_change` is called with a `FormSnapshot` after
    /// every update.
    #[wasm_bindgen(constructor)]
    pub fn new(requires_name: bool, on_change: js_sys::Function) -> WasmFormEngine {
        Self::build(FormConfig::default().with_requires_name(requires_name), on_change)
    }

    /// Creates an engine from a JSON configuration, including error
    /// messages. Throws on malformed configuration.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        config_json: &str,
        on_change: js_sys::Function,
    ) -> Result<WasmFormEngine, JsValue> {
        let config =
            FormConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(config, on_change))
    }

    fn build(config: FormConfig, on_change: js_sys::Function) -> WasmFormEngine {
        let inner = FormEngine::with_callback(config, move |snapshot| {
            let snapshot = WasmSnapshot { inner: snapshot };
            report_listener(on_change.call1(&JsValue::NULL, &JsValue::from(snapshot)));
        });
        WasmFormEngine { inner }
    }

    /// Applies raw input to `number`, `expiry`, `cvc` or `name`.
    ///
    /// Throws on any other field name.
    #[wasm_bindgen(js_name = updateField)]
    pub fn update_field(&mut self, field: &str, raw: &str) -> Result<(), JsValue> {
        self.inner
            .update_field_named(field, raw)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> WasmSnapshot {
        WasmSnapshot {
            inner: self.inner.current_snapshot(),
        }
    }

    /// Configured error message for `field`, or `undefined` when the field
    /// is not flagged. `focused` names the field that has focus, if any.
    #[wasm_bindgen(js_name = messageFor)]
    pub fn message_for(
        &self,
        field: &str,
        focused: Option<String>,
    ) -> Result<Option<String>, JsValue> {
        let field = parse_field(field)?;
        let focused = focused.as_deref().map(parse_field).transpose()?;
        let snapshot = self.inner.current_snapshot();
        Ok(self
            .inner
            .config()
            .messages
            .message_for(&snapshot, field, focused)
            .map(str::to_string))
    }
}

/// Detects the network tag of a (partial) card number.
#[wasm_bindgen(js_name = detectNetwork)]
pub fn detect_network(input: &str) -> String {
    crate::detect_network(input).tag().to_string()
}

/// Formats a card number for the network it is detected as.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(input: &str) -> String {
    crate::format_number(input, crate::detect_network(input))
}

/// Logs an exception thrown by the change listener. The engine keeps its
/// state either way. Returns false if the listener threw.
fn report_listener<T, E: std::fmt::Debug>(result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(error = ?e, "change listener threw");
            false
        }
    }
}

/// Parses a field name, throwing on unknown names.
fn parse_field(field: &str) -> Result<FieldName, JsValue> {
    field
        .parse()
        .map_err(|e: crate::FormError| JsValue::from_str(&e.to_string()))
}
