mod discipline;
mod event;
mod page;

pub use discipline::*;
pub use event::*;
pub use page::*;
