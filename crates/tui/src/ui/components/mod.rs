pub mod banner;
pub mod card;
pub mod charts;
pub mod money;
pub mod tabs;
