/// Presence in the loose sense request payloads are checked with: empty
/// strings and zero are treated the same as a missing field.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Keeps the value only if it counts as present.
pub fn present<T: Truthy>(value: Option<T>) -> Option<T> {
    value.filter(Truthy::is_truthy)
}

/// Path ids are matched as integers; anything else matches no row.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}
