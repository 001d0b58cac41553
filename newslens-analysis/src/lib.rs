//! Text algorithms for the Newslens editorial pipeline.
//!
//! Everything in this crate is pure and synchronous: shaping an untrusted
//! model reply into an [`AnalysisResult`], computing a word-level diff between
//! an article and its rewrite, cleaning free-form model prose into display
//! bullet lists, and splitting headline suggestions. No I/O, no shared state;
//! each call is independent.
//!
//! Fragments destined for rendering are wrapped in [`Markup`], which can only
//! be built by escaping plain text or by the renderers in this crate, so the
//! web layer never has to re-escape model output.

pub mod bullets;
pub mod diff;
pub mod headlines;
pub mod markup;
pub mod normalize;

pub use bullets::normalize_bullets;
pub use diff::{diff_words, render_diff, DiffToken};
pub use headlines::parse_headlines;
pub use markup::Markup;
pub use normalize::{normalize, tone_color, AnalysisResult};
