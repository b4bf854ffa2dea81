pub mod dom;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod page;
pub mod preview;
pub mod range;
pub mod send;

pub use page::Page;
