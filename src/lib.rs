//! docmark - a document annotation capture and rendering engine.
//!
//! The engine owns three things: the typed annotation model, the
//! pointer-driven drawing state machine that turns pointer events into
//! annotation records, and the per-page overlay renderer that re-derives
//! paint-ready primitives for the displayed page. Document decoding and
//! rasterization stay behind the [`document::RenderSurface`] trait; file
//! acquisition hands the session validated metadata plus an opaque
//! [`document::ContentHandle`].
//!
//! A [`session::ViewerSession`] is the single owner of all mutable state.
//! Embedders forward pointer events to it, drain its toast queue, and paint
//! whatever [`render::page_overlay`] yields.

pub mod annotations;
pub mod constants;
pub mod document;
pub mod input;
pub mod notifications;
pub mod perf;
pub mod render;
pub mod session;
pub mod settings;
pub mod signature;
pub mod types;

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static TRACING: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber.
///
/// Filter via `RUST_LOG` (default `docmark=info`). Safe to call more than
/// once; only the first call installs.
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("docmark=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    });
}
