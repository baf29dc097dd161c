mod attr;
mod class_list;
mod tag;

pub use attr::Attr;
pub use class_list::ClassList;
pub use tag::Tag;
