//! ShadCN-style reusable UI components.
//!
//! A small set of composable components rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardContent`]: Card container
//! - [`Input`], [`Textarea`]: Text fields
//! - [`Switch`]: Checkbox-backed toggle
//! - [`Skeleton`], [`SkeletonText`]: Loading placeholders
//! - [`Separator`]: Visual separator line
//! - [`icons`]: SVG icon components

mod button;
mod card;
mod icons;
mod input;
mod separator;
mod skeleton;
mod switch;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader};
pub use icons::*;
pub use input::{Input, Textarea};
pub use separator::Separator;
pub use skeleton::{Skeleton, SkeletonText};
pub use switch::Switch;
