//! Keys identifying registered states.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Identifier under which a state is registered.
///
/// Keys are usually small enums (`Normal`, `Attack`, `Done`) or string
/// literals. The [`Display`] form is what error messages and logs show, so it
/// doubles as the stringified state name.
pub trait StateKey: Copy + Eq + Hash + Debug + Display {}

impl<T> StateKey for T where T: Copy + Eq + Hash + Debug + Display {}
