//! Data model types

mod coordinates;
mod discipline;
mod enums;
mod lab_work;
mod location;
mod options;
mod person;
mod results;
mod row;
mod value;

pub use coordinates::*;
pub use discipline::*;
pub use enums::*;
pub use lab_work::*;
pub use location::*;
pub use options::*;
pub use person::*;
pub use results::*;
pub use row::*;
pub use value::*;
