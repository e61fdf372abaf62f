pub(crate) mod encoding;
pub(crate) mod str;
pub(crate) mod sync;
