//! Service layer turning merged leave records into renderable output.
//!
//! Services are pure transformations: color assignment, timeline layout
//! and the end-to-end planning orchestration. Rendering to pixels or PDF
//! bytes happens on the frontend side, which consumes the serialized
//! structures produced here.

pub mod colors;
pub mod layout;
pub mod planning;

pub use colors::{assign_colors, ColorAssignments};
pub use layout::{build_timeline, Timeline};
pub use planning::{build_planning, build_planning_from_records, Planning};
