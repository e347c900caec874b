pub mod api;
pub mod error;
pub mod form_payload;
pub mod view;
pub mod view_model;

pub use view::{SubmitTextDataForm, SubmitTextDataPage};
