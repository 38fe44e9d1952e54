// Request orchestration for the three analysis workflows:
// single-résumé analysis, cover letter drafting and recruiter mode.
// All model calls go through the injected ModelGateway.

pub mod form;
pub mod handlers;
pub mod recruiter;
