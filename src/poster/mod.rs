//! Poster rendering.
//!
//! | Step | Module |
//! |---|---|
//! | Gradient, glow, vignette | [`background`] |
//! | Circular photo frame | [`crop`] |
//! | Font lookup and fallback | [`fonts`] |
//! | Caption cleanup | [`sanitize`] |
//! | Ellipses, rings, rounded bars | [`shapes`] |
//! | Centring and wrapping | [`text`] |
//! | Full layout and PNG output | [`compose`] |

pub mod background;
pub mod compose;
pub mod crop;
pub mod fonts;
pub mod sanitize;
pub mod shapes;
pub mod text;

pub use compose::{compose_poster, poster_text, render_poster, PosterContext};
pub use fonts::FontSet;
pub use sanitize::sanitize_for_poster;
