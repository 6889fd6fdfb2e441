// std imports
pub use std::fmt::Display;
pub use std::borrow::Cow;
pub use std::ops::Range;
pub use std::path::Path;
pub use std::collections::{ HashMap, HashSet };

// serde imports
pub use serde::{ Serialize, Deserialize };

// general api imports
pub use crate::errors::*;
pub use crate::beatmaps::*;
pub use crate::gameplay::*;
