//! Layout contract of a host lazy list.

mod layout_info;

pub use layout_info::{
    LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource, LazyListScrollScope,
};
