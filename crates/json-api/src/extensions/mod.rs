//! Extension traits

mod depot;
mod owner;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use owner::OwnerExt as _;
pub(crate) use result::ResultExt as _;
