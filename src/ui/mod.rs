//! Display layer: colors, banners and terminal detection.

pub mod banner;
pub mod context;
pub mod primitives;
pub mod style;
pub mod terminal;
pub mod theme;

pub use banner::{BannerFont, BannerRenderer, BoxBanner};
pub use context::RenderOptions;
