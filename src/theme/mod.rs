//! Theming
//!
//! - **resolver**: pure mapping from (dark flag, style) to presentation tokens
//! - **preference**: the persisted dark flag and style

pub mod preference;
pub mod resolver;

pub use preference::ThemePreference;
pub use resolver::{resolve, resolve_named, Backdrop, Palette, Shade, ThemeStyle, ThemeTokens, VariantBase};
