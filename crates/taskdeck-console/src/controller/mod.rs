/*
[INPUT]:  Submodule controller logic
[OUTPUT]: Flat re-export surface for the task interaction controller
[POS]:    Controller layer - module root
[UPDATE]: When adding controller modules
*/

pub mod banner;
pub mod nav;
pub mod presentation;
pub mod session;
pub mod submit;
pub mod typeahead;
pub mod validate;

pub use banner::ErrorBanner;
pub use nav::{Destination, normalize_process_model_id};
pub use presentation::{
    ActionButton, FormAction, FormPresentation, MANUAL_TASK_MARKER, effective_schema,
    seed_defaults,
};
pub use session::TaskSession;
pub use submit::{SubmitDisposition, SubmitPlan, plan_form_submit, route_submit_receipt};
pub use typeahead::{ItemFormat, TypeaheadState};
pub use validate::{MINIMUM_DATE_ERROR, ValidationErrors, check_minimum_dates, validate_form};
