/// Generational handle: a slot index plus the generation it was issued for.
///
/// A handle whose generation no longer matches its slot is stale and must be
/// ignored by the owner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u32, u32); // (index, generation)

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Handle(index, generation)
    }

    pub fn index(&self) -> u32 {
        self.0
    }

    pub fn is_current(&self, generation: u32) -> bool {
        self.1 == generation
    }
}

#[cfg(test)]
mod tests {
    use super::Handle;

    #[test]
    fn accessors_round_trip_fields() {
        let h = Handle::new(3, 7);
        assert_eq!(h.index(), 3);
        assert!(h.is_current(7));
    }

    #[test]
    fn stale_generation_is_not_current() {
        let h = Handle::new(0, 1);
        assert!(h.is_current(1));
        assert!(!h.is_current(2));
    }
}
