//! WASM bindings for the blockpad block editor.
//!
//! Provides an embeddable editor component for JavaScript/TypeScript apps.
//! `JsBlockEditor::mount` builds the toolbar and one contenteditable per
//! block inside a host element and wires the DOM listeners itself.

mod editor;
mod events;
mod types;

pub use editor::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Install the console tracing subscriber.
///
/// Only the first call takes effect; later editors share the first level.
pub(crate) fn init_tracing(level: tracing::Level) {
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build(),
    );

    let _ = set_global_default(Registry::default().with(wasm_layer));
}
