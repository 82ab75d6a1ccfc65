pub(crate) mod advice;
pub(crate) mod charts;
pub(crate) mod form;
