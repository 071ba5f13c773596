//! Avatar WASM - WebAssembly bindings for the avatar crop editor
//!
//! This crate exposes avatar-core to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `editor` - The crop editor session (gestures, confirm/cancel)
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (JPEG/PNG, resize)
//! - `encode` - Image encoding bindings (JPEG/PNG export)
//! - `logger` - Forwards core logging to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsAvatarEditor, encode_png_from_image } from '@avatar/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = new JsAvatarEditor(window.innerWidth, window.innerHeight, 300);
//! editor.load_picked_bytes(new Uint8Array(await file.arrayBuffer()));
//! const avatar = editor.confirm();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod logger;
mod types;

// Re-export public types
pub use decode::{decode_image, resize, resize_to_fit};
pub use editor::JsAvatarEditor;
pub use encode::{encode_jpeg_from_image, encode_png_from_image};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(log::LevelFilter::Info);
}

/// Change how much of the editor's logging reaches the console.
///
/// 0 = off, 1 = errors, 2 = warnings, 3 = info, 4 = debug, 5+ = trace.
#[wasm_bindgen]
pub fn set_log_level(level: u8) {
    let filter = match level {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Error,
        2 => log::LevelFilter::Warn,
        3 => log::LevelFilter::Info,
        4 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    logger::install(filter);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
