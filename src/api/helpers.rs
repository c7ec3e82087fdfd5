//! Shared helpers for WASM API operations
//!
//! This module contains the console logging macros, serialization helpers
//! and access to the WASM-owned editor instance used by every API function.

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

use crate::editor::EditorState;
use crate::error::EditorError;

// WASM-owned editor storage (canonical source of truth for the session)
lazy_static! {
    static ref EDITOR: Mutex<Option<EditorState>> = Mutex::new(None);
}

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    // Plain objects instead of Maps so JS can use dot access
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Editor Storage
// ============================================================================

/// Lock the editor storage
pub fn lock_editor() -> Result<MutexGuard<'static, Option<EditorState>>, JsValue> {
    EDITOR.lock().map_err(|_| {
        log_error("Editor lock poisoned");
        JsValue::from_str("Editor lock poisoned")
    })
}

/// Replace the stored editor
pub fn install_editor(state: EditorState) -> Result<(), JsValue> {
    *lock_editor()? = Some(state);
    Ok(())
}

/// Run `f` against the editor; the lock is released before this returns
pub fn with_editor<R>(f: impl FnOnce(&EditorState) -> R) -> Result<R, JsValue> {
    let guard = lock_editor()?;
    let state = guard.as_ref().ok_or_else(not_initialized)?;
    Ok(f(state))
}

/// Run `f` against the editor mutably; the lock is released before this returns
pub fn with_editor_mut<R>(f: impl FnOnce(&mut EditorState) -> R) -> Result<R, JsValue> {
    let mut guard = lock_editor()?;
    let state = guard.as_mut().ok_or_else(not_initialized)?;
    Ok(f(state))
}

fn not_initialized() -> JsValue {
    editor_error(EditorError::NotInitialized)
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an editor error and convert it to a JsValue
pub fn editor_error(err: EditorError) -> JsValue {
    log_error(&err.to_string());
    JsValue::from(err)
}
