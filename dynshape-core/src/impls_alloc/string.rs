use alloc::string::String;

use crate::macros::impl_scalar;
use crate::{Poke, ScalarAffinity};

impl_scalar!(String, ScalarAffinity::String, |this| Poke::String(this));
