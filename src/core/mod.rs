pub mod ambient;
pub mod arrival;
pub mod cancel;
pub mod keys;
pub mod pattern;
pub mod phase;
pub mod slides;
pub mod tone;
pub mod typewriter;
pub mod view;

pub use ambient::*;
pub use cancel::CancelToken;
pub use pattern::*;
pub use phase::*;
