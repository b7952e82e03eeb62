//! Expiration status and alert derivation for dated compliance documents.

pub mod alerts;
pub mod clock;
pub mod domain;
mod engine;
pub mod report;
pub mod router;

pub use alerts::{collect_alerts, describe, Alert, AlertView, TrackedDocument, TrackedSubject};
pub use clock::{start_of_day, Clock, FixedClock, SystemClock};
pub use domain::{CategoryRules, DocumentCategory, ExpirationStatus, Priority};
pub use engine::{classify, days_remaining, priority_of};
pub use report::{summarize, ExpirationSummary};
pub use router::{expiration_router, ExpirationState};
