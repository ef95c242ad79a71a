use std::fmt;

/// One widget instance's persisted UI state.
///
/// The identifier is caller-supplied and must be unique within the
/// collection the record lives in.
pub trait SliceRecord: fmt::Debug + Clone + PartialEq + Send + Sync + 'static {
    fn id(&self) -> &str;
}
