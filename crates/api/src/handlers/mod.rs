pub mod calculate;
pub mod common;
pub mod health;
pub mod submit;

pub use calculate::post_calculate;
pub use health::get_health;
pub use submit::post_submit;
