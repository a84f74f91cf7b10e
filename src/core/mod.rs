// src/core/mod.rs

pub mod events;
pub mod forms;
pub mod net;
pub mod tables;
pub mod tokenize;

pub use events::{Event, EventSink};
pub use forms::{Form, FormBuilder};
pub use tables::{Cell, Row, Table, TableBuilder};
