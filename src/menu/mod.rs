//! Menu tree model
//!
//! - `node` - `MenuNode` / `MenuEntry` and the entry target enum
//! - `style` - color and banner hints passed through to the display layer

mod node;
mod style;

pub use node::{EntryTarget, MenuEntry, MenuNode};
pub use style::{BannerSpec, ColorSpec, DEFAULT_FONT};
