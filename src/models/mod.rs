pub mod associate;
pub mod event;
pub mod event_request;
pub mod location;

pub use associate::{Associate, AssociatePayload, Registration};
pub use event::{Event, EventCategory, EventPayload, EventStatus};
pub use event_request::{EventRequest, EventRequestPayload, ReviewStatus, Submitter};
pub use location::Location;
