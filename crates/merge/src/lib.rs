//! courseware-merge — partial-update merge engine.
//!
//! Applies an untyped JSON diff (as decoded from a PATCH/PUT body) onto a
//! strongly-typed record, touching only the fields named by a caller-supplied
//! allow-list.
//!
//! # Components
//!
//! * [`schema`]: per-record field tables mapping each wire name to a
//!   [`Slot`](schema::Slot) (scalar accessor, label codec, nested object,
//!   record sequence, opaque).
//! * [`coerce`]: scalar coercion from JSON shapes into primitive targets,
//!   including float-to-integer narrowing.
//! * [`label`]: string-backed closed enumerations decoded through a
//!   per-enum label table.
//! * [`apply`]: the orchestrator walking the diff and dispatching on the
//!   slot kind; atomic (all fields or none).

pub mod types;
pub mod schema;
pub mod coerce;
pub mod label;
pub mod apply;

pub use types::{AllowList, MergeError, MergeOptions};
pub use schema::{Field, LabelSlot, Mergeable, ObjectSlot, RecordsSlot, Slot};
pub use label::LabelEnum;
pub use apply::{merge, merge_into, merge_with, rebuild_records};
