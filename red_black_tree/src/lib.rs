mod display;
mod rbtree;
mod validator;

pub use display::render;
pub use rbtree::{Color, InOrder, Node, RBTree, Side};
pub use validator::{check, height, Violation};
