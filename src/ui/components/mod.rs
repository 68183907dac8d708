//! ShadCN-style reusable UI components.
//!
//! Each component is a plain function returning an HTML string. Arguments
//! named `children` are already-rendered HTML; any user-visible text must be
//! passed through [`crate::ui::escape`] first.
//!
//! # Components
//!
//! - [`button`]: Clickable button with variants
//! - [`card`]: Card container
//! - [`input`], [`textarea`]: Text fields
//! - [`badge`]: Status badge/tag
//! - [`organization_avatar`]: Logo with icon fallback
//! - [`scroll_area`]: Scrollable container
//! - [`icons`]: SVG icon components

mod avatar;
mod badge;
mod button;
mod card;
pub mod icons;
mod input;
mod scroll_area;

pub use avatar::organization_avatar;
pub use badge::{BadgeVariant, badge};
pub use button::{ButtonProps, ButtonSize, ButtonVariant, button};
pub use card::card;
pub use icons::*;
pub use input::{InputProps, input, textarea};
pub use scroll_area::scroll_area;
